use std::io::{self, BufRead, Write};

use outta_core::events::{Category, Event};
use outta_core::TriageError;
use outta_engine::ExploreController;

const HINTS: &str =
    "swipe: left = Not Interested, down = Save for Later, up = Public Calendar, right = Private Calendar";

const HELP: &str = "\
commands:
  left | right | up | down (or l/r/u/d)   swipe the top card
  category <label>                        set the category pill (or \"All\")
  search <text>                           set the search box (empty to clear)
  clear                                   clear all filters
  reset                                   explore the same deck again
  categories                              list the category pills
  status                                  reprint the header and top card
  quit                                    leave";

/// The interactive explore screen: renders the top card, reads
/// gestures and filter commands from stdin, and surfaces the
/// "All Caught Up" / "No Events Found" states.
pub fn run(controller: &mut ExploreController) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout();

    writeln!(out, "{HINTS}")?;
    writeln!(out, "type `help` for the full command list\n")?;
    render(controller, &mut out)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (command, rest) = match input.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (input, ""),
        };

        match command {
            "quit" | "exit" | "q" => break,
            "help" => writeln!(out, "{HELP}")?,
            "categories" => {
                writeln!(out, "All")?;
                for cat in Category::ALL {
                    writeln!(out, "{}", cat.label())?;
                }
            }
            "status" => {}
            "clear" => controller.clear_filters(),
            "reset" => controller.reset(),
            "category" => match rest.parse() {
                Ok(filter) => controller.set_category(filter),
                Err(e) => writeln!(out, "!! {e}")?,
            },
            "search" => controller.set_query(rest),
            _ => match controller.swipe_str(input) {
                Ok(outcome) => {
                    writeln!(out, "\u{2713} {}: {}", outcome.action.label(), outcome.event.title)?
                }
                Err(TriageError::InvalidDirection(_)) => {
                    writeln!(out, "!! unknown command {input:?} (try `help`)")?
                }
                Err(e @ TriageError::OutOfRange { .. }) => writeln!(out, "!! {e}")?,
            },
        }

        writeln!(out)?;
        render(controller, &mut out)?;
    }

    Ok(())
}

fn render(controller: &ExploreController, out: &mut impl Write) -> io::Result<()> {
    let filter = controller.filter();
    writeln!(
        out,
        "{} events in {} \u{2022} {} swiped",
        controller.matching_count(),
        filter.category,
        controller.swipe_count()
    )?;

    if controller.is_empty() {
        writeln!(out, "No Events Found")?;
        writeln!(out, "Try a different search or category (`clear` resets the filters)")?;
    } else if controller.is_exhausted() {
        writeln!(out, "All Caught Up!")?;
        writeln!(
            out,
            "You swiped {} events. `reset` to explore them again.",
            controller.swipe_count()
        )?;
    } else if let Some(event) = controller.current() {
        render_card(event, out)?;
    }

    write!(out, "> ")?;
    out.flush()
}

fn render_card(event: &Event, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\u{250c} {} [{}] {}", event.title, event.category, event.price)?;
    writeln!(out, "\u{2502} {}", event.date)?;
    writeln!(out, "\u{2502} {} \u{2022} {}", event.location, event.area)?;
    writeln!(
        out,
        "\u{2502} {}/{} attending",
        event.attending, event.capacity
    )?;
    if event.friends_interested > 0 {
        writeln!(out, "\u{2502} +{} friends interested", event.friends_interested)?;
    }
    writeln!(out, "\u{2514} {}", event.description)
}
