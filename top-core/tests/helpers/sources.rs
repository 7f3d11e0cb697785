use crate::format::{RowSchema, SourceDescriptor};

/// Builds text content of a result or baseline source.
#[derive(Default)]
pub struct SourceBuilder {
    lines: Vec<String>,
    delimiter: String,
}

impl SourceBuilder {
    pub fn new(delimiter: &str) -> Self {
        Self { lines: vec![], delimiter: delimiter.to_string() }
    }

    pub fn add_comment(mut self, comment: &str) -> Self {
        self.lines.push(format!("# {comment}"));
        self
    }

    pub fn add_row(mut self, cells: &[&str]) -> Self {
        self.lines.push(cells.join(self.delimiter.as_str()));
        self
    }

    pub fn add_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

/// Creates a descriptor of `name,profit` source with a fixed label.
pub fn create_labeled_source(name: &str, label: &str) -> SourceDescriptor {
    SourceDescriptor::new(name, Some(label), RowSchema::new(0, 1))
}

/// Creates a descriptor of `name,algorithm,descriptor,profit,feasible` source.
pub fn create_mixed_source(name: &str) -> SourceDescriptor {
    SourceDescriptor::new(
        name,
        None,
        RowSchema { instance: 0, algorithm: Some(1), descriptor: Some(2), profit: 3, feasible: Some(4), columns: None },
    )
}
