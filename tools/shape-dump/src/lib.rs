// Command implementations for the shape-dump CLI.

use std::path::Path;

use drawing_shapes::scene::{Scene, SHAPE_NAMES};
use drawing_shapes::svg::render_svg;
use drawing_shapes::ShapeResult;

/// Load `scene_path` and return it as an SVG document.
pub fn scene_to_svg(scene_path: &Path) -> ShapeResult<String> {
    let scene = Scene::load(scene_path)?;
    render_svg(&scene)
}

/// Load `scene_path` and return its command listing.
pub fn scene_to_commands(scene_path: &Path) -> ShapeResult<String> {
    let scene = Scene::load(scene_path)?;
    scene.dump_commands()
}

/// Default output file for `svg`: the scene path with an `.svg` extension.
pub fn default_svg_path(scene_path: &Path) -> String {
    scene_path.with_extension("svg").to_string_lossy().into_owned()
}

pub fn available_shapes() -> &'static [&'static str] {
    SHAPE_NAMES
}
