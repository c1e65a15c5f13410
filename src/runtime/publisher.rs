use crate::runtime::wire::OutboundFrame;
use anyhow::{Context, Result};
use std::io::Write;

/// Where saved diffs go once the handler returns.
pub trait Publisher {
    fn publish(&mut self, frame: &OutboundFrame) -> Result<()>;
}

/// Writes each frame as one JSON line and flushes, so a reader on the other
/// end of a pipe sees pushes as they happen.
pub struct LinePublisher<W: Write> {
    out: W,
}

impl<W: Write> LinePublisher<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Publisher for LinePublisher<W> {
    fn publish(&mut self, frame: &OutboundFrame) -> Result<()> {
        let line = serde_json::to_string(frame).context("Failed to encode frame")?;
        writeln!(self.out, "{}", line)
            .with_context(|| format!("Failed to push frame {} to {}", frame.seq, frame.client))?;
        self.out.flush().context("Failed to flush push stream")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{markdown_card, CardOp, SurfaceDiff};

    #[test]
    fn test_one_line_per_frame() {
        let mut publisher = LinePublisher::new(Vec::new());
        for seq in 1..=2 {
            let diff = SurfaceDiff {
                seq,
                ops: vec![CardOp::Put {
                    name: "hello".into(),
                    id: 0,
                    card: markdown_card("1 1 3 1", "Markdown card", "Hello World!"),
                }],
            };
            publisher
                .publish(&OutboundFrame::new("tab-1", "/demo", diff))
                .unwrap();
        }

        let out = String::from_utf8(publisher.into_inner()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["seq"], 1);
        assert_eq!(first["ops"][0]["op"], "put");
        assert_eq!(first["ops"][0]["card"]["view"], "markdown");
    }
}
