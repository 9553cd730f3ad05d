// SPDX-License-Identifier: MPL-2.0
//! Shared pieces for rendering project images and tags.

use crate::media::{ImageCache, ImageEntry};
use crate::projects::ProjectImage;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{container, image, text};
use iced::{ContentFit, Element, Length};

/// Renders a cached project image, or a labelled placeholder while it is
/// loading, failed, or when the record has no image at all.
pub fn project_image<'a, Message: 'a>(
    picture: Option<&'a ProjectImage>,
    fallback: &'a str,
    images: &'a ImageCache,
    height: f32,
) -> Element<'a, Message> {
    let Some(picture) = picture else {
        return placeholder(fallback.to_string(), height);
    };

    match images.peek(&picture.url) {
        Some(ImageEntry::Ready(handle)) => container(
            image(handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fixed(height)),
        )
        .style(styles::container::image_frame)
        .into(),
        Some(ImageEntry::Pending) => placeholder(
            format!("Loading {}…", picture.label(fallback)),
            height,
        ),
        Some(ImageEntry::Failed) | None => placeholder(picture.label(fallback).to_string(), height),
    }
}

fn placeholder<'a, Message: 'a>(label: String, height: f32) -> Element<'a, Message> {
    container(text(label).size(typography::BODY))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(height))
        .style(styles::container::image_frame)
        .into()
}

/// Technology pill.
pub fn tag<'a, Message: 'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::tag)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image::Handle;

    #[test]
    fn renders_every_cache_state() {
        let ready = ProjectImage {
            url: "ready".into(),
            alt: Some("Ready".into()),
        };
        let pending = ProjectImage {
            url: "pending".into(),
            alt: None,
        };
        let mut cache = ImageCache::new(8);
        cache.request("ready");
        cache.complete("ready".into(), Ok(Handle::from_bytes(vec![1, 2, 3])));
        cache.request("pending");

        let _a: Element<'_, ()> = project_image(Some(&ready), "Project", &cache, 100.0);
        let _b: Element<'_, ()> = project_image(Some(&pending), "Project", &cache, 100.0);
        let _c: Element<'_, ()> = project_image(None, "Project", &cache, 100.0);
        let _d: Element<'_, ()> = tag("Rust");
    }
}
