use jobfill::{FillOutcome, FillReport};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(report: &FillReport, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint("⚙  Fill pass", ansi::CYAN)));

    // Discovery summary
    println!("\n{}", palette.paint("━━━ Discovery ━━━", ansi::GRAY));
    let m = &report.metrics;
    println!(
        "  Candidates: {}  │  Eligible: {}  │  Matched: {}",
        palette.paint(m.candidates.to_string(), ansi::CYAN),
        palette.paint(m.eligible.to_string(), ansi::CYAN),
        palette.paint(m.matched.to_string(), ansi::GREEN),
    );
    if m.frames_scanned + m.frames_denied > 0 {
        println!(
            "  Frames: {} scanned, {}",
            m.frames_scanned,
            if m.frames_denied > 0 {
                palette.paint(format!("{} denied", m.frames_denied), ansi::YELLOW)
            } else {
                palette.dim("0 denied")
            }
        );
    }

    // Assignments
    println!("\n{}", palette.paint("━━━ Assignments ━━━", ansi::GRAY));
    if report.assignments.is_empty() {
        println!("{}", palette.dim("  No fields matched"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • Inputs were filtered out (type filter, hidden/disabled/readonly)");
        println!("  • No signature pattern or vendor attribute rule matched");
        println!("\n{}", palette.dim("  Tip: Set RUST_LOG=jobfill=trace to see per-rule tests"));
    } else {
        for assignment in &report.assignments {
            let (mark, detail) = match &assignment.outcome {
                FillOutcome::Filled(value) => {
                    (palette.paint("✓", ansi::GREEN), palette.paint(format!("\"{value}\""), ansi::GREEN))
                }
                FillOutcome::NoValue => {
                    (palette.dim("○"), palette.dim("no saved value"))
                }
                FillOutcome::Failed(err) => {
                    (palette.paint("✗", ansi::RED), palette.paint(err.clone(), ansi::RED))
                }
            };
            println!(
                "  {} {:<12} {} {}",
                mark,
                assignment.field.name(),
                palette.dim(&assignment.element),
                detail,
            );
        }
    }

    // Timing
    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Filled: {}  │  Errors: {}",
        palette.paint(format!("{:?}", m.total), ansi::GREEN),
        palette.bold(m.filled.to_string()),
        if m.errors > 0 {
            palette.paint(m.errors.to_string(), ansi::RED)
        } else {
            palette.dim("0")
        },
    );
    println!();
}
