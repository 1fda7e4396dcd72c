/// Line-oriented frame for character displays.
#[derive(Debug, Clone)]
pub struct TextFrame {
    width: usize,
    lines: Vec<String>,
}

impl TextFrame {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            lines: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Appends one line, cut at the frame width.
    pub fn push_line(&mut self, line: &str) {
        self.lines.push(line.chars().take(self.width).collect());
    }

    pub fn push_blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Appends `text` word-wrapped to the frame width. Words longer than a
    /// line are split.
    pub fn push_wrapped(&mut self, text: &str) {
        let mut line = String::new();
        let mut line_chars = 0usize;

        for word in text.split_whitespace() {
            let word_chars = word.chars().count();
            if line_chars > 0 && line_chars + 1 + word_chars > self.width {
                self.lines.push(std::mem::take(&mut line));
                line_chars = 0;
            }

            if word_chars > self.width {
                for ch in word.chars() {
                    if line_chars == self.width {
                        self.lines.push(std::mem::take(&mut line));
                        line_chars = 0;
                    }
                    line.push(ch);
                    line_chars += 1;
                }
                continue;
            }

            if line_chars > 0 {
                line.push(' ');
                line_chars += 1;
            }
            line.push_str(word);
            line_chars += word_chars;
        }

        if line_chars > 0 {
            self.lines.push(line);
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
