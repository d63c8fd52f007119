//! Tesseract command-line backend

use crate::error::OcrError;
use image::{ImageFormat, RgbImage};
use metaform_domain::{BoundingBox, RasterPage, Recognition, TextRecognizer};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// TSV level of a single word
const WORD_LEVEL: u32 = 5;

/// OCR through the `tesseract` program
///
/// Each page is written to a temporary PNG and recognized with TSV output.
/// Words are regrouped into lines, each line reported with the union of its
/// word boxes and its mean word confidence scaled to `0..=1`.
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    binary: PathBuf,
    language: String,
}

impl TesseractRecognizer {
    /// Create a recognizer, checking that the binary runs
    pub fn new(binary: impl Into<PathBuf>, language: impl Into<String>) -> Result<Self, OcrError> {
        let binary = binary.into();
        let output = Command::new(&binary).arg("--version").output().map_err(|e| {
            OcrError::EngineUnavailable(format!("cannot run {}: {}", binary.display(), e))
        })?;
        if !output.status.success() {
            return Err(OcrError::EngineUnavailable(format!(
                "{} --version exited with {}",
                binary.display(),
                output.status
            )));
        }

        Ok(Self {
            binary,
            language: language.into(),
        })
    }

    fn run(&self, image_path: &Path) -> Result<String, OcrError> {
        let output = Command::new(&self.binary)
            .arg(image_path)
            .arg("stdout")
            .args(["-l", &self.language])
            .arg("tsv")
            .output()?;

        if !output.status.success() {
            return Err(OcrError::Engine(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl TextRecognizer for TesseractRecognizer {
    type Error = OcrError;

    fn recognize(&mut self, page: &RasterPage) -> Result<Vec<Recognition>, Self::Error> {
        let image = RgbImage::from_raw(page.width, page.height, page.rgb.clone())
            .ok_or_else(|| OcrError::Image(format!("page {} has an invalid buffer", page.index)))?;

        let file = tempfile::Builder::new()
            .prefix("metaform-page-")
            .suffix(".png")
            .tempfile()?;
        image
            .save_with_format(file.path(), ImageFormat::Png)
            .map_err(|e| OcrError::Image(e.to_string()))?;

        let tsv = self.run(file.path())?;
        let lines = parse_tsv(&tsv);
        debug!("Tesseract found {} line(s) on page {}", lines.len(), page.index);
        Ok(lines)
    }
}

#[derive(Default)]
struct LineAccumulator {
    words: Vec<String>,
    bounds: Option<BoundingBox>,
    confidence_sum: f32,
    confidence_count: usize,
}

impl LineAccumulator {
    fn push(&mut self, word: &str, bounds: BoundingBox, confidence: f32) {
        self.words.push(word.to_string());
        self.bounds = Some(match self.bounds {
            Some(current) => current.union(&bounds),
            None => bounds,
        });
        if confidence >= 0.0 {
            self.confidence_sum += confidence;
            self.confidence_count += 1;
        }
    }

    fn finish(self) -> Recognition {
        let confidence = (self.confidence_count > 0)
            .then(|| self.confidence_sum / self.confidence_count as f32 / 100.0);
        Recognition {
            bounds: self.bounds,
            text: self.words.join(" "),
            confidence,
        }
    }
}

/// Group tesseract TSV word rows into text lines, in reading order
fn parse_tsv(tsv: &str) -> Vec<Recognition> {
    let mut order: Vec<(u32, u32, u32, u32)> = Vec::new();
    let mut lines: HashMap<(u32, u32, u32, u32), LineAccumulator> = HashMap::new();

    for row in tsv.lines().skip(1) {
        let columns: Vec<&str> = row.split('\t').collect();
        if columns.len() < 12 {
            continue;
        }
        let numbers: Vec<Option<u32>> = columns[..10].iter().map(|c| c.trim().parse().ok()).collect();
        let &[Some(level), Some(page), Some(block), Some(par), Some(line), _, Some(left), Some(top), Some(width), Some(height)] =
            numbers.as_slice()
        else {
            continue;
        };
        let word = columns[11].trim();
        if level != WORD_LEVEL || word.is_empty() {
            continue;
        }
        let confidence: f32 = columns[10].trim().parse().unwrap_or(-1.0);

        let key = (page, block, par, line);
        if !lines.contains_key(&key) {
            order.push(key);
        }
        lines
            .entry(key)
            .or_default()
            .push(word, BoundingBox::new(left, top, width, height), confidence);
    }

    order
        .into_iter()
        .filter_map(|key| lines.remove(&key))
        .map(LineAccumulator::finish)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext";

    #[test]
    fn test_words_grouped_into_lines() {
        let tsv = format!(
            "{HEADER}\n\
             1\t1\t0\t0\t0\t0\t0\t0\t100\t100\t-1\t\n\
             4\t1\t1\t1\t1\t0\t10\t10\t80\t12\t-1\t\n\
             5\t1\t1\t1\t1\t1\t10\t10\t30\t12\t90\tHello\n\
             5\t1\t1\t1\t1\t2\t45\t11\t45\t11\t70\tworld\n\
             5\t1\t1\t1\t2\t1\t10\t30\t20\t12\t50\tNext\n"
        );

        let lines = parse_tsv(&tsv);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "Hello world");
        assert_eq!(lines[0].bounds, Some(BoundingBox::new(10, 10, 80, 12)));
        assert!((lines[0].confidence.unwrap() - 0.8).abs() < 1e-6);
        assert_eq!(lines[1].text, "Next");
    }

    #[test]
    fn test_blank_words_and_short_rows_are_skipped() {
        let tsv = format!(
            "{HEADER}\n\
             5\t1\t1\t1\t1\t1\t0\t0\t5\t5\t95\t   \n\
             garbage row\n\
             5\t1\t1\t1\t1\t2\t0\t0\t5\t5\t-1\tword\n"
        );

        let lines = parse_tsv(&tsv);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "word");
        assert_eq!(lines[0].confidence, None);
    }

    #[test]
    fn test_empty_output() {
        assert!(parse_tsv("").is_empty());
        assert!(parse_tsv(HEADER).is_empty());
    }
}
