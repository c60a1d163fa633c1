/// Identifier for a feedback image the front end knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageId {
    Trophy,
    SadFace,
}

/// Presentation boundary for everything the quiz flow wants shown.
///
/// The core emits intents through this trait and never draws; the front
/// end decides what a message, an image, or the discount reward look like.
pub trait PresentationSink {
    fn show_message(&mut self, text: &str);

    fn show_image(&mut self, image: ImageId);

    /// One-time-per-session reward signal for a perfect round.
    fn show_discount_won(&mut self);
}

impl<S: PresentationSink + ?Sized> PresentationSink for &mut S {
    fn show_message(&mut self, text: &str) {
        (**self).show_message(text);
    }

    fn show_image(&mut self, image: ImageId) {
        (**self).show_image(image);
    }

    fn show_discount_won(&mut self) {
        (**self).show_discount_won();
    }
}
