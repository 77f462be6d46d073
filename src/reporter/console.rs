//! Console reporter with colored output and an ASCII quadrant map

use crate::{AssessmentDefinition, AssessmentReport};
use colored::Colorize;

// Chart dimensions. Odd on both sides so the reference lines sit on a cell.
const CHART_COLS: usize = 33;
const CHART_ROWS: usize = 17;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show the per-category breakdown
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable the per-category breakdown
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Full report: header, quadrant map, axis scores, zone narrative.
    pub fn report(&self, definition: &AssessmentDefinition, report: &AssessmentReport) {
        self.print_header(definition, report);

        for line in render_chart(definition, report) {
            println!("   {}", line);
        }
        println!();

        println!(
            "   {}: {} | {}: {}",
            definition.x_label,
            self.signed(report.point.x),
            definition.y_label,
            self.signed(report.point.y)
        );
        println!(
            "   Total: {:.1} / {:.1}",
            report.point.total_score, report.point.total_max
        );
        println!();

        if self.verbose {
            self.print_breakdown(report);
        }

        self.print_zone(report);
        println!();
    }

    /// One line per assessment: subject, totals, zone.
    pub fn report_quiet(&self, report: &AssessmentReport) {
        println!(
            "{}: {:.1}/{:.1} ({})",
            report.subject_name, report.point.total_score, report.point.total_max, report.zone.title
        );
    }

    fn print_header(&self, definition: &AssessmentDefinition, report: &AssessmentReport) {
        println!();
        let title = format!("{}: {}", definition.title, report.subject_name);
        if self.use_colors {
            println!("{}", title.bold());
        } else {
            println!("{}", title);
        }
        let status = if report.complete {
            "complete".to_string()
        } else {
            format!("partial, {} / {} answered", report.answered, report.total)
        };
        println!("   Definition: {} | {}", report.definition, status);
        println!();
    }

    fn print_breakdown(&self, report: &AssessmentReport) {
        for category in &report.categories {
            println!(
                "   {:<28} {} / {:.1}",
                category.title,
                self.signed(category.score),
                category.max
            );
        }
        println!();
    }

    fn print_zone(&self, report: &AssessmentReport) {
        if self.use_colors {
            println!("   {}", report.zone.title.bold());
            println!("   {}", report.zone.description.dimmed());
        } else {
            println!("   {}", report.zone.title);
            println!("   {}", report.zone.description);
        }
    }

    fn signed(&self, value: f64) -> String {
        let text = format!("{:+.1}", value);
        if !self.use_colors {
            return text;
        }
        // High friction / high sensitivity read as warnings, matching the
        // sign convention of the axes.
        if value > 0.0 {
            text.red().to_string()
        } else if value < 0.0 {
            text.green().to_string()
        } else {
            text
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed chart domain per axis: the score range of the required questions,
/// mirroring the original chart's static domain.
fn axis_maxima(definition: &AssessmentDefinition) -> (f64, f64) {
    let mut x_max = 0.0;
    let mut y_max = 0.0;
    for question in definition.required_questions() {
        if let Some(category) = definition.category(&question.category_id) {
            if category.axis_target.feeds_x() {
                x_max += 2.0 * question.weight;
            }
            if category.axis_target.feeds_y() {
                y_max += 2.0 * question.weight;
            }
        }
    }
    (x_max, y_max)
}

/// Render the quadrant map with the plotted point.
fn render_chart(definition: &AssessmentDefinition, report: &AssessmentReport) -> Vec<String> {
    let (x_max, y_max) = axis_maxima(definition);
    let mid_col = CHART_COLS / 2;
    let mid_row = CHART_ROWS / 2;

    let mut grid = vec![vec![' '; CHART_COLS]; CHART_ROWS];
    for cell in grid[mid_row].iter_mut() {
        *cell = '─';
    }
    for row in grid.iter_mut() {
        row[mid_col] = '│';
    }
    grid[mid_row][mid_col] = '┼';

    let col = plot_offset(report.point.x, x_max, mid_col as isize);
    let row = -plot_offset(report.point.y, y_max, mid_row as isize);
    let col = (mid_col as isize + col) as usize;
    let row = (mid_row as isize + row) as usize;
    grid[row][col] = '●';

    let mut lines = vec![format!("{} ↑", definition.y_label)];
    lines.extend(grid.into_iter().map(|row| row.into_iter().collect()));
    lines.push(format!("{:>width$} →", definition.x_label, width = CHART_COLS));
    lines
}

/// Scale a coordinate into a signed cell offset, clamped to the grid.
fn plot_offset(value: f64, max: f64, half: isize) -> isize {
    if max <= 0.0 {
        return 0;
    }
    let scaled = (value / max * half as f64).round() as isize;
    scaled.clamp(-half, half)
}
