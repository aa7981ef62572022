use overlay_gen::hook;
use overlay_gen::{Canvas, FontResolver, OverlayStyle};

fn main() {
    env_logger::init();

    // usage: overlay <input-image> <output-image> [hook text...]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (input, output) = match (args.first(), args.get(1)) {
        (Some(input), Some(output)) => (input.clone(), output.clone()),
        _ => {
            eprintln!("usage: overlay <input-image> <output-image> [hook text...]");
            std::process::exit(2);
        }
    };
    let text = if args.len() > 2 {
        args[2..].join(" ")
    } else {
        hook::hook_for("reading the Quran daily", None)
    };

    // find whatever bold-ish font the system has installed
    let font = FontResolver::default()
        .resolve()
        .expect("a usable font is installed");

    // decode the slide, overlay the hook, and write the result back out
    let mut canvas = Canvas::open(&input).expect("can decode input image");
    overlay_gen::overlay_text(&mut canvas, &text, &font, &OverlayStyle::default());
    canvas.save(&output).expect("can write output image");

    println!("wrote {output}");
}
