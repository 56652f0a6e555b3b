//! Prints the sample points of a color arc.
//!
//! Usage:
//! ```text
//! cargo run --example arc_dump                         # saturation 0.5, 7 points
//! cargo run --example arc_dump -- 0.2 9                # saturation, point count
//! RUST_LOG=chromarc=trace cargo run --example arc_dump # show fitted circle parameters
//! ```

use chromarc::color::{ArcFactory, Lab, LabModel};
use chromarc::operations::projection::{ProjectHue, ProjectSaturation};
use chromarc::operations::transform::RotateArc;

fn main() -> chromarc::Result<()> {
    // Default: WARN for everything, DEBUG for chromarc.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,chromarc=debug"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let saturation = args.next().and_then(|s| s.parse().ok()).unwrap_or(0.5);
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(7);

    let factory = ArcFactory::new(LabModel);
    let from = Lab::new(70.0, 45.0, 60.0);
    let to = Lab::new(35.0, 10.0, -55.0);

    let arc = factory.build_arc(&from, &to, saturation, count)?;
    print_arc("chord arc", &factory, &arc);

    let spun = RotateArc::new(&arc, std::f64::consts::FRAC_PI_4).execute()?;
    print_arc("spun by pi/4", &factory, &spun);

    let preview = ProjectSaturation::new(&arc, 0.1).execute(factory.settings())?;
    println!("apex at saturation 0.1: {preview:.3}");
    let hue = ProjectHue::new(&arc, 0.5).execute()?;
    println!("apex after 0.5 rad hue: {hue:.3}");

    let apex = factory.build_apex_arc(&factory.peak_color(&arc), saturation, count)?;
    print_arc("apex arc", &factory, &apex);
    Ok(())
}

fn print_arc(title: &str, factory: &ArcFactory<LabModel>, arc: &chromarc::ColorArc) {
    println!("{title}: axis {:.4}", arc.axis());
    for (i, lab) in factory.colors_of(arc).iter().enumerate() {
        println!("  [{i:2}] L={:7.3} a={:8.3} b={:8.3}", lab.l, lab.a, lab.b);
    }
    println!("  peak {:.3}", arc.peak());
}
