//! Delimiter detection.

/// Number of leading bytes inspected when sniffing a delimiter.
pub const SAMPLE_SIZE: usize = 4096;

/// Candidates in order of preference when counts tie.
const CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

const FALLBACK: u8 = b',';

/// Guesses the delimiter of a delimited text from its first [`SAMPLE_SIZE`] bytes.
///
/// Each candidate splits the sample into CSV records, so quoted fields may
/// hold delimiters and line breaks. A candidate qualifies when every record
/// has the same number of fields, more than one. The qualifying candidate
/// with the most fields wins. Blank samples and inconclusive samples fall
/// back to comma.
pub fn sniff_delimiter(content: &str) -> u8 {
    let truncated = content.len() > SAMPLE_SIZE;
    let mut end = SAMPLE_SIZE.min(content.len());
    while !content.is_char_boundary(end) {
        end -= 1;
    }
    let sample = &content[..end];

    let mut best: Option<(u8, usize)> = None;
    for candidate in CANDIDATES {
        let counts = field_counts(sample, candidate, truncated);
        let Some((&first, rest)) = counts.split_first() else {
            continue;
        };
        if first < 2 || rest.iter().any(|&count| count != first) {
            continue;
        }
        if best.is_none_or(|(_, fields)| first > fields) {
            best = Some((candidate, first));
        }
    }

    best.map(|(delimiter, _)| delimiter).unwrap_or(FALLBACK)
}

/// Field count of every non-blank record of `sample` split on `delimiter`.
fn field_counts(sample: &str, delimiter: u8, truncated: bool) -> Vec<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(sample.as_bytes());

    let mut counts: Vec<usize> = reader
        .byte_records()
        .flatten()
        .filter(|record| !(record.len() == 1 && record[0].trim_ascii().is_empty()))
        .map(|record| record.len())
        .collect();
    // The last record of a cut sample is partial.
    if truncated && counts.len() > 1 {
        counts.pop();
    }
    counts
}
