/// Example: Render one frame of an OBJ file to stdout, without raw mode
///
/// Usage: cargo run --example snapshot -- path/to/file.obj

use std::env;
use std::io::{self, stdout, Write};
use wf3d_core::{obj, Mesh, RenderConfig, Renderer, Viewport};
use wf3d_terminal::{demo_cube, demo_scene, Canvas};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let mesh: Mesh = match args.get(1) {
        Some(path) => obj::load_obj(path)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?,
        None => {
            eprintln!("Usage: {} <obj-file>", args[0]);
            eprintln!("\nNo OBJ file provided, using default cube...");
            demo_cube()
        }
    };
    println!("Loaded {} vertices, {} faces", mesh.vertices().len(), mesh.faces().len());

    let viewport = Viewport::new(100, 36);
    let renderer = Renderer::from_config(&RenderConfig::default(), viewport);
    let objects = demo_scene(&renderer, mesh);

    let mut canvas = Canvas::new(viewport.width as usize, viewport.height as usize);
    renderer.draw(&objects, &mut canvas);

    let mut stdout = stdout();
    for y in 0..viewport.height as usize {
        let line: String = (0..viewport.width as usize)
            .filter_map(|x| canvas.glyph(x, y))
            .collect();
        writeln!(stdout, "{}", line.trim_end())?;
    }
    stdout.flush()
}
