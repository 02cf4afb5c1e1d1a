// Scene inspection CLI for drawing-shapes.
//
// Usage:
//   shape-dump svg <scene.json> [-o <output.svg>]
//   shape-dump commands <scene.json>
//   shape-dump list
//
// Set RUST_LOG=debug to see degenerate-input reports from the generators.

use std::path::Path;
use std::process;

use shape_dump::{available_shapes, default_svg_path, scene_to_commands, scene_to_svg};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "svg" => cmd_svg(&args[2..]),
        "commands" => cmd_commands(&args[2..]),
        "list" => cmd_list(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("shape-dump - render drawing-shapes scene files");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  svg <scene.json> [-o <output.svg>]");
    eprintln!("      Write the scene as an SVG document.");
    eprintln!();
    eprintln!("  commands <scene.json>");
    eprintln!("      Print every generated path command.");
    eprintln!();
    eprintln!("  list");
    eprintln!("      List the shape names a scene may use.");
}

fn cmd_list() {
    println!("Available shapes:");
    for name in available_shapes() {
        println!("  {}", name);
    }
}

fn cmd_svg(args: &[String]) {
    if args.is_empty() {
        eprintln!("Usage: shape-dump svg <scene.json> [-o <output.svg>]");
        process::exit(1);
    }

    let scene_path = Path::new(&args[0]);
    let mut output_path: Option<String> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-o" if i + 1 < args.len() => {
                output_path = Some(args[i + 1].clone());
                i += 2;
            }
            other => {
                log::warn!("ignoring unknown option: {}", other);
                i += 1;
            }
        }
    }
    let output = output_path.unwrap_or_else(|| default_svg_path(scene_path));

    let svg = scene_to_svg(scene_path).unwrap_or_else(|e| {
        eprintln!("{}: {}", scene_path.display(), e);
        process::exit(1);
    });

    if let Err(e) = std::fs::write(&output, svg) {
        eprintln!("Failed to write {}: {}", output, e);
        process::exit(1);
    }
    println!("Saved: {}", output);
}

fn cmd_commands(args: &[String]) {
    let Some(scene_path) = args.first() else {
        eprintln!("Usage: shape-dump commands <scene.json>");
        process::exit(1);
    };

    match scene_to_commands(Path::new(scene_path)) {
        Ok(dump) => print!("{}", dump),
        Err(e) => {
            eprintln!("{}: {}", scene_path, e);
            process::exit(1);
        }
    }
}
