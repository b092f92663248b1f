/// Terminal-based wireframe renderer
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, SetTitle},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use tracing::{info, warn};
use wf3d_core::{
    InputState, Key, Mesh, RenderConfig, Renderer, SceneObject, Surface, Transform, Viewport,
};

pub mod canvas;

pub use canvas::Canvas;

/// Degrees of yaw per frame for the demo object and its axes
const DEMO_SPIN: f32 = -0.3;

/// Main application struct for terminal wireframe rendering
pub struct TerminalApp {
    renderer: Renderer,
    objects: Vec<SceneObject>,
    canvas: Canvas,
    input: InputState,
    fixed_viewport: bool,
    target_fps: u32,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    /// Size the viewport from the config, falling back to the terminal size
    pub fn new(config: &RenderConfig, mesh: Mesh) -> io::Result<Self> {
        let (columns, rows) = terminal::size()?;
        let fixed_viewport = config.width > 0 && config.height > 0;
        let viewport = if fixed_viewport {
            if config.width > columns as u32 || config.height > rows as u32 {
                warn!(
                    width = config.width,
                    height = config.height,
                    columns,
                    rows,
                    "viewport larger than the terminal, output will be cut"
                );
            }
            Viewport::new(config.width, config.height)
        } else {
            Viewport::new(columns as u32, rows as u32)
        };

        let renderer = Renderer::from_config(config, viewport);
        let objects = demo_scene(&renderer, mesh);
        info!(
            width = viewport.width,
            height = viewport.height,
            objects = objects.len(),
            "scene ready"
        );

        Ok(Self {
            renderer,
            objects,
            canvas: Canvas::new(viewport.width as usize, viewport.height as usize),
            input: InputState::new(),
            fixed_viewport,
            target_fps: config.fps.max(1),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_secs(1) / self.target_fps;

        while self.running {
            let frame_start = Instant::now();

            self.handle_input()?;
            self.update();
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        info!("render loop stopped");
        Ok(())
    }

    /// Collect every key event queued since the last frame into one snapshot
    fn handle_input(&mut self) -> io::Result<()> {
        self.input.clear();

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(KeyEvent {
                    code, modifiers, kind, ..
                }) => {
                    let ctrl_c =
                        code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL);
                    if code == KeyCode::Esc || ctrl_c {
                        self.running = false;
                        continue;
                    }
                    if let Some(key) = map_key(code) {
                        match kind {
                            KeyEventKind::Release => self.input.release(key),
                            _ => self.input.press(key),
                        }
                    }
                }
                Event::Resize(columns, rows) if !self.fixed_viewport => {
                    self.canvas.resize(columns as usize, rows as usize);
                    self.renderer.resize(self.canvas.viewport());
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn update(&mut self) {
        self.renderer.control(&self.input);
        for object in &mut self.objects {
            object.step();
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.canvas.clear();
        self.renderer.draw(&self.objects, &mut self.canvas);
        self.canvas.set_caption(&format!("{:.1}", self.fps));

        let mut stdout = stdout();
        self.canvas.present(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            SetTitle(self.canvas.caption()),
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "WF3D | FPS: {} | Arrows=Turn WASD=Move Q/E=Up/Down Esc=Quit",
                self.canvas.caption()
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

/// World axes, the object's own axes, then the object itself
pub fn demo_scene(renderer: &Renderer, mesh: Mesh) -> Vec<SceneObject> {
    let mut world_axes = SceneObject::axes();
    world_axes.scale(10.0, 10.0, 10.0);
    // Keep the origin off the exact screen-center line.
    world_axes.translate(0.0001, 0.0001, 0.0001);

    let mut axes = SceneObject::axes().with_spin(DEMO_SPIN);
    axes.scale(6.0, 6.0, 6.0);
    axes.translate(0.7, 0.9, 0.7);

    let mut object = renderer.create_object(mesh).with_spin(DEMO_SPIN);
    object.rotate_y(-45.0);

    vec![world_axes, axes, object]
}

/// Cube scaled and centered to suit the default camera
pub fn demo_cube() -> Mesh {
    let mut cube = Mesh::cube();
    cube.transform(&Transform::translate(-0.5, -0.5, -0.5));
    cube.transform(&Transform::scale(8.0, 8.0, 8.0));
    cube
}

fn map_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Char('a') => Key::A,
        KeyCode::Char('d') => Key::D,
        KeyCode::Char('w') => Key::W,
        KeyCode::Char('s') => Key::S,
        KeyCode::Char('q') => Key::Q,
        KeyCode::Char('e') => Key::E,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        _ => return None,
    };
    Some(key)
}
