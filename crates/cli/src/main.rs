use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use planar::geom2::{CanonicalFrame, GeomCfg, LineSegment, Point, Triangle};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Run planar geometry queries from the command line")]
struct Cmd {
    /// Tolerance for both near-equality and on-axis classification
    #[arg(long, global = true)]
    eps: Option<f64>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Test two segments (`x1,y1:x2,y2`) for intersection and print a JSON report
    Intersect {
        #[arg(long)]
        a: LineSegment,
        #[arg(long)]
        b: LineSegment,
        /// Include the canonical-frame intermediates in the report
        #[arg(long)]
        trace: bool,
        /// Write the report here instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Area of a triangle given as `x1,y1:x2,y2:x3,y3`
    Area {
        #[arg(long)]
        tri: Triangle,
    },
    /// Angle in radians of a point (`x,y`) or of a segment's direction
    Angle {
        #[arg(long, conflicts_with = "segment")]
        point: Option<Point>,
        #[arg(long)]
        segment: Option<LineSegment>,
    },
    /// Print the library version and the active tolerances
    Report,
}

#[derive(Debug, Serialize)]
struct IntersectReport {
    intersects: bool,
    a: LineSegment,
    b: LineSegment,
    cfg: GeomCfg,
    #[serde(skip_serializing_if = "Option::is_none")]
    frame: Option<CanonicalFrame>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = geom_cfg(cmd.eps)?;
    match cmd.action {
        Action::Intersect { a, b, trace, out } => intersect(a, b, trace, out, cfg),
        Action::Area { tri } => area(tri),
        Action::Angle { point, segment } => angle(point, segment),
        Action::Report => report(cfg),
    }
}

fn geom_cfg(eps: Option<f64>) -> Result<GeomCfg> {
    match eps {
        None => Ok(GeomCfg::default()),
        Some(e) if e.is_finite() && e >= 0.0 => Ok(GeomCfg::uniform(e)),
        Some(e) => bail!("--eps must be a finite non-negative number, got {e}"),
    }
}

fn intersect_report(a: LineSegment, b: LineSegment, trace: bool, cfg: GeomCfg) -> IntersectReport {
    IntersectReport {
        intersects: a.intersects_with(b, cfg),
        a,
        b,
        cfg,
        frame: trace.then(|| a.to_canonical_frame_with(b, cfg)),
    }
}

fn intersect(
    a: LineSegment,
    b: LineSegment,
    trace: bool,
    out: Option<String>,
    cfg: GeomCfg,
) -> Result<()> {
    tracing::info!(a = %a, b = %b, eps = cfg.eps_axis, trace, out = ?out, "intersect");
    let report = intersect_report(a, b, trace, cfg);
    let body = serde_json::to_vec_pretty(&report)?;
    match out {
        None => println!("{}", String::from_utf8_lossy(&body)),
        Some(out) => {
            let out_path = Path::new(&out);
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(out_path, &body).with_context(|| format!("writing {out}"))?;
            tracing::info!(report = %out, "written");
        }
    }
    Ok(())
}

fn area(tri: Triangle) -> Result<()> {
    tracing::info!(p1 = %tri.p1, p2 = %tri.p2, p3 = %tri.p3, "area");
    println!("{}", tri.area());
    Ok(())
}

fn angle(point: Option<Point>, segment: Option<LineSegment>) -> Result<()> {
    let theta = match (point, segment) {
        (Some(p), _) => p.angle(),
        (None, Some(l)) => l.angle(),
        (None, None) => bail!("one of --point or --segment is required"),
    };
    tracing::info!(point = ?point, segment = ?segment, theta, "angle");
    println!("{theta}");
    Ok(())
}

fn report_json(cfg: GeomCfg) -> serde_json::Value {
    serde_json::json!({
        "planar_version": planar::VERSION,
        "cfg": cfg,
    })
}

fn report(cfg: GeomCfg) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&report_json(cfg))?);
    Ok(())
}
