//! Placeholder hook and caption templates.
//!
//! These are deliberately dumb string templates: the production pipeline
//! swaps in a text model here, but nothing in this crate depends on more
//! than "some short string to overlay and some caption to post".

/// A short attention-grabbing line to overlay on the first slide
pub fn hook_for(topic: &str, persona: Option<&str>) -> String {
    match persona {
        Some(persona) => {
            format!("{persona} tried this with {topic} — you won't believe the result.")
        }
        None => format!("I tried {topic} one week and this happened..."),
    }
}

/// The caption attached to the post itself
pub fn caption_for(hook: &str) -> String {
    format!("{hook} Read the full story in the comments. #ai #tiktok")
}
