use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use softrast::prelude::*;
use softrast::window::{self, FpsCounter, FrameLimiter, Window, WindowEvent};

#[derive(Parser)]
#[command(about = "Spin a Babylon scene in a software-rendered window")]
struct Args {
    /// Babylon JSON scene to display
    scene: PathBuf,

    #[arg(long, default_value_t = window::WINDOW_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = window::WINDOW_HEIGHT)]
    height: u32,

    /// Rotation added to every mesh's pitch and yaw each frame, in radians
    #[arg(long, default_value_t = 0.01)]
    spin: f32,

    /// Frame rate cap
    #[arg(long, default_value_t = window::FPS)]
    fps: u32,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut meshes = load_scene(&args.scene)?;
    let mut window = Window::new("softrast", args.width, args.height)?;
    let mut device = Device::new(args.width, args.height);
    let camera = Camera::default();

    let mut limiter = FrameLimiter::new(&window, args.fps);
    let mut fps_counter = FpsCounter::new();

    while window.poll_events() != WindowEvent::Quit {
        for mesh in &mut meshes {
            mesh.transform_mut().rotate_x(args.spin).rotate_y(args.spin);
        }

        device.clear(colors::BACKGROUND);
        device.render(&camera, &meshes);
        device.present(&mut window)?;

        fps_counter.tick(limiter.wait_and_get_delta(&window));
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
