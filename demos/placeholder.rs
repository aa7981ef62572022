use overlay_gen::hook;
use overlay_gen::sizes::SLIDE_PORTRAIT;
use overlay_gen::{placeholder_slide, FontResolver, OverlayStyle};

fn main() {
    env_logger::init();

    let topic = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "reading one page of the Quran every morning".to_string());

    let font = FontResolver::default()
        .resolve()
        .expect("a usable font is installed");

    // build the same first slide the pipeline would produce with no image
    // API configured: a dark placeholder carrying the prompt, with the
    // hook overlaid on top
    let hook = hook::hook_for(&topic, None);
    let prompt = format!("A realistic photo series about {topic}.");
    let (w, h) = SLIDE_PORTRAIT;
    let mut canvas = placeholder_slide(w, h, &prompt, Some(&font));
    overlay_gen::overlay_text(&mut canvas, &hook, &font, &OverlayStyle::default());

    canvas.save("final_slide_1.png").expect("can write slide");
    println!("wrote final_slide_1.png");
    println!("caption: {}", hook::caption_for(&hook));
}
