// SPDX-License-Identifier: MPL-2.0
//! Skills screen with one tab per category.

use crate::ui::animation;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::projects::image_view::tag;
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row};
use iced::{alignment::Horizontal, Element, Length, Padding};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Frontend,
    Backend,
    Tools,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Frontend, Category::Backend, Category::Tools];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::Tools => "Tools",
        }
    }

    #[must_use]
    pub fn skills(self) -> &'static [&'static str] {
        match self {
            Category::Frontend => &[
                "HTML5",
                "CSS3",
                "JavaScript",
                "TypeScript",
                "React",
                "Next.js",
                "Tailwind CSS",
                "Redux",
            ],
            Category::Backend => &["Node.js", "Express", "MongoDB", "Firebase", "REST APIs"],
            Category::Tools => &["Git", "GitHub", "VS Code", "Figma", "Vercel", "Netlify"],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    active: Category,
    changed_at: Option<Instant>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Select(Category),
}

impl State {
    #[must_use]
    pub fn active(&self) -> Category {
        self.active
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Select(category) => {
                if category != self.active {
                    self.active = category;
                    self.changed_at = Some(Instant::now());
                }
            }
        }
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.changed_at
            .is_some_and(|since| {
                !animation::TAB.is_settled(now.saturating_duration_since(since))
            })
    }

    pub fn view(&self, now: Instant) -> Element<'_, Message> {
        let tabs = Category::ALL.iter().fold(
            Row::new().spacing(spacing::XS),
            |row, &category| {
                row.push(
                    button(text(category.label()).size(typography::BODY_LG))
                        .padding([spacing::XS, spacing::LG])
                        .on_press(Message::Select(category))
                        .style(styles::button::tab(category == self.active)),
                )
            },
        );

        let elapsed = self
            .changed_at
            .map_or(Duration::MAX, |since| now.saturating_duration_since(since));
        let shift = animation::TAB.pose_at(elapsed).x.max(0.0);

        let skills = self
            .active
            .skills()
            .iter()
            .fold(Row::new().spacing(spacing::XS), |row, skill| row.push(tag(skill)));

        Container::new(
            Column::new()
                .spacing(spacing::LG)
                .padding(spacing::XL)
                .align_x(Horizontal::Center)
                .push(text("My Skills").size(typography::TITLE_LG))
                .push(tabs)
                .push(Container::new(skills.wrap()).padding(Padding::ZERO.left(shift))),
        )
        .center_x(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_frontend() {
        assert_eq!(State::default().active(), Category::Frontend);
    }

    #[test]
    fn selecting_a_tab_switches_skills() {
        let mut skills = State::default();
        skills.update(Message::Select(Category::Tools));
        assert_eq!(skills.active(), Category::Tools);
        assert!(skills.is_animating(Instant::now()));
        assert!(!skills.is_animating(Instant::now() + Duration::from_secs(2)));
    }

    #[test]
    fn every_category_lists_skills_and_renders() {
        let mut skills = State::default();
        for category in Category::ALL {
            assert!(!category.skills().is_empty());
            skills.update(Message::Select(category));
            drop(skills.view(Instant::now()));
        }
    }
}
