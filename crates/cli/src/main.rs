use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Args, Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::{MakeWriter, SubscriberBuilder};
use tracing_subscriber::util::SubscriberInitExt;
use underplex::api::*;

mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Seating rings, circle intersections and collection helpers")]
struct Cmd {
    /// Write the JSON result here (plus a `<stem>.provenance.json` sidecar) instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Intersect a line or segment with a circle
    Intersect(IntersectArgs),
    /// Seat players around a table and list each one's neighbors
    Seat {
        #[arg(long, value_delimiter = ',', required = true)]
        players: Vec<String>,
        /// Rotate the table so this player sits first
        #[arg(long)]
        first: Option<String>,
    },
    /// Every k-element subset of the given items
    Choose {
        #[arg(long)]
        k: usize,
        items: Vec<String>,
    },
    /// Min-max normalize KEY=VALUE scores
    Normalize {
        #[arg(allow_hyphen_values = true)]
        scores: Vec<String>,
    },
    /// Pick one item uniformly at random
    Pick {
        items: Vec<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
#[command(group(ArgGroup::new("shape").required(true).args(["slope", "vertical", "segment"])))]
struct IntersectArgs {
    #[arg(long, allow_hyphen_values = true)]
    slope: Option<f64>,
    /// Intercept for --slope
    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    intercept: f64,
    /// x of a vertical line
    #[arg(long, allow_hyphen_values = true)]
    vertical: Option<f64>,
    /// Segment endpoints as x1,y1,x2,y2
    #[arg(long, allow_hyphen_values = true)]
    segment: Option<String>,
    /// Circle center as x,y
    #[arg(long, allow_hyphen_values = true, default_value = "0,0")]
    center: String,
    #[arg(long)]
    radius: f64,
}

#[derive(Serialize)]
struct Xy {
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct SeatRow<'a> {
    player: &'a str,
    next: Option<&'a str>,
    previous: Option<&'a str>,
}

/// Log formatter used by `main`; stdout is reserved for JSON results.
fn log_subscriber<W>(writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(writer)
        .finish()
}

fn main() -> Result<()> {
    log_subscriber(std::io::stderr).init();
    let cmd = Cmd::parse();
    let (result, payload) = match cmd.action {
        Action::Intersect(args) => intersect(args)?,
        Action::Seat { players, first } => seat(players, first)?,
        Action::Choose { k, items } => choose(k, items),
        Action::Normalize { scores } => normalize_scores(scores)?,
        Action::Pick { items, seed } => pick(items, seed),
        Action::Report => report(),
    };
    emit(&result, cmd.out.as_deref(), &payload, &mut std::io::stdout().lock())
}

fn emit(
    result: &Value,
    out: Option<&Path>,
    payload: &Payload,
    stdout: &mut impl Write,
) -> Result<()> {
    let Some(out) = out else {
        writeln!(stdout, "{}", serde_json::to_string_pretty(result)?)?;
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(result)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let sidecar = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote");
    Ok(())
}

fn parse_coords(text: &str, expected: usize) -> Result<Vec<f64>> {
    let coords = text
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .with_context(|| format!("bad coordinate {s:?} in {text:?}"))
        })
        .collect::<Result<Vec<_>>>()?;
    if coords.len() != expected {
        bail!("expected {expected} comma-separated numbers, got {text:?}");
    }
    Ok(coords)
}

fn intersect(args: IntersectArgs) -> Result<(Value, Payload)> {
    tracing::info!(
        slope = ?args.slope,
        vertical = ?args.vertical,
        segment = ?args.segment,
        radius = args.radius,
        "intersect"
    );
    let c = parse_coords(&args.center, 2)?;
    let circle = Circle::new(Point::new(c[0], c[1]), args.radius);
    let (shape, hits) = if let Some(seg) = &args.segment {
        let s = parse_coords(seg, 4)?;
        let segment = Segment::new(Point::new(s[0], s[1]), Point::new(s[2], s[3]));
        (segment.to_string(), segment_circle(&segment, &circle))
    } else if let Some(x) = args.vertical {
        let line = Line::vertical(x);
        (line.to_string(), line_circle(&line, &circle))
    } else if let Some(m) = args.slope {
        let line = Line::sloped(m, args.intercept).context("building line")?;
        (line.to_string(), line_circle(&line, &circle))
    } else {
        bail!("one of --slope, --vertical or --segment is required");
    };

    let mut points: Vec<Xy> = hits.iter().map(|p| Xy { x: p.x(), y: p.y() }).collect();
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    let params = json!({
        "shape": shape,
        "center": [c[0], c[1]],
        "radius": args.radius
    });
    let result = json!({ "shape": shape, "points": points });
    Ok((result, Payload::new("intersect", params)))
}

fn seat(players: Vec<String>, first: Option<String>) -> Result<(Value, Payload)> {
    tracing::info!(n = players.len(), first = ?first, "seat");
    let mut ring: Ring<String> = players.iter().map(|p| p.trim().to_string()).collect();
    if ring.len() != players.len() {
        tracing::warn!(requested = players.len(), seated = ring.len(), "duplicate players seated once");
    }
    if let Some(first) = &first {
        ring.make_first(first)
            .with_context(|| format!("seating {first} first"))?;
    }
    let table: Vec<SeatRow> = ring
        .iter()
        .map(|p| SeatRow {
            player: p,
            next: ring.next(p).map(String::as_str),
            previous: ring.previous(p).map(String::as_str),
        })
        .collect();
    let result = json!({ "order": ring.to_vec(), "table": table });
    let params = json!({ "players": players, "first": first });
    Ok((result, Payload::new("seat", params)))
}

fn choose(k: usize, items: Vec<String>) -> (Value, Payload) {
    tracing::info!(k, n = items.len(), "choose");
    let pool: BTreeSet<String> = items.iter().cloned().collect();
    let subsets = choose_k(&pool, k);
    tracing::debug!("{}", format_sets(&subsets));
    let result = json!({ "count": subsets.len(), "subsets": subsets });
    (result, Payload::new("choose", json!({ "k": k, "items": items })))
}

fn normalize_scores(scores: Vec<String>) -> Result<(Value, Payload)> {
    tracing::info!(n = scores.len(), "normalize");
    let mut parsed: HashMap<String, f64> = HashMap::new();
    for pair in &scores {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("expected KEY=VALUE, got {pair:?}"))?;
        let value: f64 = value
            .trim()
            .parse()
            .with_context(|| format!("bad score in {pair:?}"))?;
        parsed.insert(key.trim().to_string(), value);
    }
    let normed: BTreeMap<String, f64> = normalize(&parsed).into_iter().collect();
    let result = serde_json::to_value(normed)?;
    Ok((result, Payload::new("normalize", json!({ "scores": scores }))))
}

fn pick(items: Vec<String>, seed: Option<u64>) -> (Value, Payload) {
    tracing::info!(n = items.len(), seed = ?seed, "pick");
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let picked = select_random_with(&items, &mut rng);
    let result = json!({ "picked": picked });
    (result, Payload::new("pick", json!({ "items": items, "seed": seed })))
}

fn report() -> (Value, Payload) {
    let payload = Payload::new("report", json!({}));
    (provenance::document(&payload, &[]), payload)
}
