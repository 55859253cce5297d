#![forbid(unsafe_code)]

//! Headless demo: drives a single-expansion accordion with a scripted tap
//! sequence against a console-printing host list.
//!
//! Run with: `cargo run -p concertina-demo`
//! Set `RUST_LOG=debug` to watch the engine's tracing spans.

use concertina_core::{Accordion, HostList, Item, Section};
use concertina_view::{AccordionDelegate, ListProvider, RowContent};
use std::ops::Range;

/// Host list that prints every edit instead of animating one.
struct ConsoleHost {
    /// Number of rows treated as on screen; inserts past this trigger the
    /// scroll-into-view call.
    viewport_rows: usize,
}

impl HostList for ConsoleHost {
    fn insert_rows(&mut self, section: usize, rows: Range<usize>) {
        println!(
            "    host: insert rows {}-{} in section {section}",
            rows.start,
            rows.end - 1
        );
    }

    fn delete_rows(&mut self, section: usize, rows: Range<usize>) {
        println!(
            "    host: delete rows {}-{} in section {section}",
            rows.start,
            rows.end - 1
        );
    }

    fn is_row_visible(&self, _section: usize, flat_index: usize) -> bool {
        flat_index < self.viewport_rows
    }

    fn scroll_to_row(&mut self, section: usize, flat_index: usize) {
        println!("    host: scroll to row {flat_index} of section {section}");
    }
}

/// Delegate that narrates selections.
struct ConsoleDelegate;

impl AccordionDelegate<String, String> for ConsoleDelegate {
    fn on_parent_selected(&mut self, payload: &String) {
        println!("    selected group: {payload}");
    }

    fn on_child_selected(&mut self, payload: &String) {
        println!("    selected team: {payload}");
    }
}

type DemoProvider =
    ListProvider<String, String, concertina_view::FixedHeights, ConsoleDelegate>;

fn group(name: &str, teams: [&str; 4]) -> Item<String, String> {
    Item::collapsed(
        name.to_owned(),
        teams.iter().map(|team| (*team).to_owned()).collect(),
    )
}

/// The 2018 group stage; fixed data so every run prints the same thing.
fn fixture() -> Vec<Section<String, String>> {
    vec![
        Section::new(vec![
            group("Group A", ["Uruguay", "Russia", "Saudi Arabia", "Egypt"]),
            group("Group B", ["Spain", "Portugal", "Iran", "Morocco"]),
            group("Group C", ["France", "Denmark", "Peru", "Australia"]),
            group("Group D", ["Croatia", "Argentina", "Nigeria", "Iceland"]),
            group("Group E", ["Brazil", "Switzerland", "Serbia", "Costa Rica"]),
            group("Group F", ["Sweden", "Mexico", "South Korea", "Germany"]),
            group("Group G", ["Belgium", "England", "Tunisia", "Panama"]),
            group("Group H", ["Colombia", "Japan", "Senegal", "Poland"]),
        ])
        .with_header("World Cup 2018"),
    ]
}

fn render(provider: &DemoProvider) {
    let accordion = provider.accordion();
    for section in 0..provider.section_count() {
        if let Some(title) = provider.header_title(section) {
            println!("  == {title} ==");
        }
        let rows = provider.row_count(section).unwrap_or(0);
        for flat in 0..rows {
            let Ok(content) = provider.row_content(section, flat) else {
                continue;
            };
            match content {
                RowContent::Parent(name) => {
                    let Ok(resolved) = accordion.resolve_row(section, flat) else {
                        continue;
                    };
                    let marker = if accordion.sections()[section].items()[resolved.parent]
                        .is_expanded()
                    {
                        'v'
                    } else {
                        '>'
                    };
                    println!("  {flat:>2}  {marker} {name}");
                }
                RowContent::Child(name) => println!("  {flat:>2}      {name}"),
            }
        }
    }
    println!();
}

fn tap(provider: &mut DemoProvider, host: &mut ConsoleHost, flat: usize) {
    println!("tap row {flat}:");
    if let Err(err) = provider.on_row_tapped(host, 0, flat) {
        println!("    rejected: {err}");
    }
    println!();
}

fn main() -> concertina_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    tracing::info!("concertina demo starting");

    let accordion = Accordion::single(fixture())?;
    let mut provider = ListProvider::new(accordion).with_delegate(ConsoleDelegate);
    let mut host = ConsoleHost { viewport_rows: 6 };

    println!("initial projection:");
    render(&provider);

    // Expand Group A.
    tap(&mut provider, &mut host, 0);
    render(&provider);

    // Tap a team inside the expanded run; nothing moves.
    tap(&mut provider, &mut host, 2);

    // Expand Group D: Group A collapses first, shifting D's row up by four,
    // and the freshly inserted run ends past the viewport, so the host is
    // asked to scroll.
    tap(&mut provider, &mut host, 7);
    render(&provider);

    // Collapse Group D again.
    tap(&mut provider, &mut host, 3);
    render(&provider);

    Ok(())
}
