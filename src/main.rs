//! dualpane demo driver.
//!
//! A line-oriented stand-in for the presentation layer: it feeds
//! already-resolved `(view, index)` tuples to the store and prints the
//! resulting panes. No gesture or geometry handling lives here; commands
//! arrive with indices already decided, exactly as a drag controller would
//! deliver them.
//!
//! Commands on stdin:
//!
//! ```text
//! show                              print both panes
//! move <left|right> <i> <left|right> <j>
//! reset                             restore the starting sequence
//! quit
//! ```

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use dualpane::display::DisplayOrder;
use dualpane::{sample_items, Item, ItemListStore, MovePolicy, Snapshot, ViewId};

#[derive(Debug, Parser)]
#[command(name = "dualpane", about = "Two-pane item board demo")]
struct Cli {
    /// Boundary between the left and right panes.
    #[arg(long, default_value_t = 6)]
    split_index: usize,

    /// What happens to the occupant of a target slot.
    #[arg(long, value_enum, default_value = "insert-shift")]
    policy: PolicyArg,

    /// Item ids to mark as locked (repeatable).
    #[arg(long = "lock", value_name = "ID")]
    lock: Vec<u32>,

    /// Print panes as JSON instead of plain text.
    #[arg(long)]
    json: bool,

    /// Show panes in a different order than they are stored: a
    /// comma-separated permutation of storage positions, applied to any
    /// pane whose length matches. Storage order stays authoritative.
    #[arg(long, value_name = "POSITIONS", value_parser = parse_display_order)]
    display_order: Option<DisplayOrder>,
}

fn parse_display_order(s: &str) -> Result<DisplayOrder, String> {
    let positions = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| format!("'{}' is not a position", part.trim()))
        })
        .collect::<Result<Vec<usize>, String>>()?;
    DisplayOrder::new(positions)
        .ok_or_else(|| format!("'{}' is not a permutation of 0..n", s))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    InsertShift,
    Swap,
}

impl From<PolicyArg> for MovePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::InsertShift => MovePolicy::InsertShift,
            PolicyArg::Swap => MovePolicy::Swap,
        }
    }
}

/// Logs go to stderr so they never interleave with pane output on stdout.
/// `DUALPANE_LOG` overrides the default `info` filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("DUALPANE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn starting_items(locked: &[u32]) -> Vec<Item> {
    sample_items()
        .into_iter()
        .map(|item| {
            if locked.contains(&item.id) {
                item.locked()
            } else {
                item
            }
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let initial = starting_items(&cli.lock);
    let mut store =
        ItemListStore::new(initial.clone(), cli.split_index)?.with_policy(cli.policy.into());
    store.subscribe(|snapshot| {
        tracing::debug!(
            left = snapshot.left.len(),
            right = snapshot.right.len(),
            "board updated"
        );
    });

    let order = cli.display_order.as_ref();
    print_panes(&store, cli.json, order)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match run_command(&mut store, &initial, line.trim()) {
            Command::Continue { changed } => {
                if changed {
                    print_panes(&store, cli.json, order)?;
                }
            }
            Command::Show => print_panes(&store, cli.json, order)?,
            Command::Quit => break,
        }
    }

    Ok(())
}

enum Command {
    Continue { changed: bool },
    Show,
    Quit,
}

fn run_command(store: &mut ItemListStore, initial: &[Item], line: &str) -> Command {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] => Command::Continue { changed: false },
        ["show"] => Command::Show,
        ["quit"] | ["exit"] => Command::Quit,
        ["reset"] => match store.reset(initial.to_vec()) {
            Ok(()) => {
                tracing::info!("board reset");
                Command::Continue { changed: true }
            }
            Err(err) => {
                println!("{}", err.user_message());
                Command::Continue { changed: false }
            }
        },
        ["move", src_view, src_index, dst_view, dst_index] => {
            match parse_move(src_view, src_index, dst_view, dst_index) {
                Ok((sv, si, dv, di)) => match store.move_item(sv, si, dv, di) {
                    Ok(()) => Command::Continue { changed: true },
                    Err(err) => {
                        tracing::warn!(%err, "move rejected");
                        println!("{}", err.user_message());
                        Command::Continue { changed: false }
                    }
                },
                Err(reason) => {
                    println!("{}", reason);
                    Command::Continue { changed: false }
                }
            }
        }
        _ => {
            println!("commands: show | move <left|right> <i> <left|right> <j> | reset | quit");
            Command::Continue { changed: false }
        }
    }
}

type MoveArgs = (ViewId, usize, ViewId, usize);

fn parse_move(
    src_view: &str,
    src_index: &str,
    dst_view: &str,
    dst_index: &str,
) -> Result<MoveArgs, String> {
    let sv: ViewId = src_view.parse()?;
    let dv: ViewId = dst_view.parse()?;
    let si: usize = src_index
        .parse()
        .map_err(|_| format!("'{}' is not an index", src_index))?;
    let di: usize = dst_index
        .parse()
        .map_err(|_| format!("'{}' is not an index", dst_index))?;
    Ok((sv, si, dv, di))
}

/// Reorder a pane for display, falling back to storage order when the
/// permutation does not fit this pane's length.
fn displayed(items: &[Item], order: Option<&DisplayOrder>) -> Vec<Item> {
    order
        .and_then(|order| order.apply(items))
        .unwrap_or_else(|| items.to_vec())
}

fn print_panes(store: &ItemListStore, json: bool, order: Option<&DisplayOrder>) -> anyhow::Result<()> {
    let snapshot = store.snapshot();
    let shown = Snapshot {
        left: displayed(&snapshot.left, order),
        right: displayed(&snapshot.right, order),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &shown)?;
        writeln!(out)?;
    } else {
        write_pane(&mut out, "left", &shown.left)?;
        write_pane(&mut out, "right", &shown.right)?;
    }
    out.flush()?;
    Ok(())
}

fn write_pane(out: &mut impl Write, name: &str, items: &[Item]) -> io::Result<()> {
    writeln!(out, "{}:", name)?;
    for (index, item) in items.iter().enumerate() {
        let lock = if item.movable { "" } else { " [locked]" };
        writeln!(
            out,
            "  [{}] {} {}{}",
            index, item.label, item.color_tag, lock
        )?;
    }
    Ok(())
}
