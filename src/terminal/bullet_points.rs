use console::style;
use std::fmt::Display;

const INDENT: &str = "  ";
const BULLET: char = '•';

/// Prints nested bullet point lists, one line per item
pub struct BulletPointPrinter<W: LineWriter + Clone> {
    writer: W,
    indent: String,
}

impl<W: LineWriter + Clone> BulletPointPrinter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            indent: String::new(),
        }
    }

    pub fn print_item(&self, message: impl Display) {
        self.writer
            .write_line(&format!("{}{BULLET} {message}", self.indent));
    }

    /// Prints `items` one level deeper than this printer, or a placeholder if there are none
    pub fn print_sub_items<T: Display>(&self, items: impl IntoIterator<Item = T>) {
        let nested = self.indent();
        let mut empty = true;
        for item in items {
            nested.print_item(item);
            empty = false;
        }
        if empty {
            nested.print_item(style("(none)").italic());
        }
    }

    pub fn indent(&self) -> Self {
        Self {
            writer: self.writer.clone(),
            indent: format!("{}{INDENT}", self.indent),
        }
    }
}

impl BulletPointPrinter<Stdout> {
    pub fn new_stdout() -> Self {
        Self::new(Stdout)
    }
}

pub trait LineWriter {
    fn write_line(&self, line: &str);
}

#[derive(Clone, Copy)]
pub struct Stdout;

impl LineWriter for Stdout {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}


#[cfg(test)]
mod tests {
    use super::testutils::RecordingLineWriter;
    use super::*;

    fn printer() -> (RecordingLineWriter, BulletPointPrinter<RecordingLineWriter>) {
        console::set_colors_enabled(false);
        let writer = RecordingLineWriter::default();
        (writer.clone(), BulletPointPrinter::new(writer))
    }

    #[test]
    fn nested_items() {
        let (writer, printer) = printer();
        printer.print_item("2024-03-15");
        let nested = printer.indent();
        nested.print_item("2024/03/2024-03-15.csv");
        nested.indent().print_item(42);
        printer.print_item("2024-03-16");
        assert_eq!(
            vec![
                "• 2024-03-15",
                "  • 2024/03/2024-03-15.csv",
                "    • 42",
                "• 2024-03-16",
            ],
            writer.lines(),
        );
    }

    #[test]
    fn sub_items() {
        let (writer, printer) = printer();
        printer.print_item("Files");
        printer.print_sub_items(["a.csv", "b.csv"]);
        assert_eq!(vec!["• Files", "  • a.csv", "  • b.csv"], writer.lines());
    }

    #[test]
    fn no_sub_items() {
        let (writer, printer) = printer();
        printer.indent().print_sub_items(Vec::<String>::new());
        assert_eq!(vec!["    • (none)"], writer.lines());
    }
}
