use std::collections::HashSet;
use std::error::Error;
use std::fs::{self, File};
use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use get_size::GetSize;
use rayon::prelude::*;
use serde::Serialize;
use suffixarray::{BoundSearchResult, RankRange, SearchAllSuffixesResult, SuffixArrayIndex};
use tracing::{debug, info};

use crate::line_index::LineIndex;

pub mod line_index;

/// Enum that represents the kinds of search that we support
/// - Descend through the suffix array one symbol at a time and return the matching rank range
/// - Binary search the lower and upper boundary of the matching ranks
/// - Count the occurrences
/// - Report every occurrence with its line and column
/// - Search all patterns at once and report the first occurrences in text order, page by page
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum SearchMode {
    Range,
    Bounds,
    Count,
    Locate,
    Multi,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
pub struct Arguments {
    /// File whose bytes are indexed. The file may not contain a 0x00 byte.
    #[arg(short, long)]
    text_file: String,
    /// A file that contains the patterns that we want to search. Every line contains a new pattern.
    #[arg(short, long)]
    search_file: Option<String>,
    /// A pattern to search, can be given multiple times
    #[arg(short, long)]
    pattern: Vec<String>,
    /// `range` descends one symbol at a time and reports the closed range of matching ranks.
    /// `bounds` reports the half-open boundaries found with a direct binary search.
    /// `count` only reports the number of occurrences.
    /// `locate` reports every occurrence as line and column.
    /// `multi` searches all patterns together and reports the first occurrences in text order.
    #[arg(short, long, value_enum, default_value_t = SearchMode::Locate)]
    mode: SearchMode,
    /// Maximum number of reported occurrences per pattern, or per page when searching all patterns together
    #[arg(long, default_value_t = 10000)]
    cutoff: usize,
    /// First text offset that is reported in `multi` mode, use the printed next offset to get the following page
    #[arg(long, default_value_t = 0)]
    from: usize,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[arg(long)]
    threads: Option<NonZeroUsize>,
    /// This will only build the index and stop after that is completed. Used during benchmarking.
    #[arg(long)]
    build_only: bool,
    /// Print the longest substring that occurs at least twice and the number of distinct substrings
    #[arg(long)]
    repeats: bool,
}

/// A single occurrence of a pattern in the text
///
/// Columns are byte offsets in the line, `end_column` is exclusive and never reaches past the
/// line, so a match that continues on the next line is cut at the line end.
#[derive(Serialize, Debug, PartialEq)]
pub struct Occurrence {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    pub end_column: usize,
    pub line_text: String,
}

impl Occurrence {
    /// The line with the matched part between brackets
    fn highlighted(&self) -> String {
        let line = self.line_text.as_str();
        match (
            line.get(..self.column),
            line.get(self.column..self.end_column),
            line.get(self.end_column..),
        ) {
            (Some(before), Some(matched), Some(after)) => format!("{before}[{matched}]{after}"),
            _ => line.to_string(),
        }
    }
}

/// The outcome of searching one pattern
#[derive(Serialize, Debug, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SearchOutcome {
    Range {
        range: Option<RankRange>,
    },
    Bounds {
        bounds: Option<(usize, usize)>,
    },
    Count {
        count: usize,
    },
    Locate {
        occurrences: Vec<Occurrence>,
        cutoff_reached: bool,
    },
}

#[derive(Serialize, Debug, PartialEq)]
pub struct PatternResult {
    pub pattern: String,
    #[serde(flatten)]
    pub outcome: SearchOutcome,
}

impl PatternResult {
    /// Format the result as output, one line in json and a summary line followed by one line per
    /// occurrence in text
    fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Json => serde_json::to_string(self),
            OutputFormat::Text => Ok(format!("{};{}", self.pattern, self.outcome)),
        }
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchOutcome::Range { range: Some(range) } => {
                write!(f, "{};{}", range.first, range.last)
            }
            SearchOutcome::Bounds {
                bounds: Some((lower, upper)),
            } => write!(f, "{lower};{upper}"),
            SearchOutcome::Range { range: None } | SearchOutcome::Bounds { bounds: None } => {
                write!(f, "/")
            }
            SearchOutcome::Count { count } => write!(f, "{count}"),
            SearchOutcome::Locate {
                occurrences,
                cutoff_reached,
            } => {
                let marker = if *cutoff_reached { "+" } else { "" };
                let positions: Vec<String> = occurrences
                    .iter()
                    .map(|occurrence| format!("{}:{}", occurrence.line + 1, occurrence.column + 1))
                    .collect();
                write!(f, "{}{marker};{}", occurrences.len(), positions.join(","))?;
                for occurrence in occurrences {
                    write!(
                        f,
                        "\n  {}:{} {}",
                        occurrence.line + 1,
                        occurrence.column + 1,
                        occurrence.highlighted()
                    )?;
                }
                Ok(())
            }
        }
    }
}

/// One page of a search over several patterns at once
#[derive(Serialize, Debug, PartialEq)]
pub struct MultiSearchPage {
    pub results: Vec<PatternResult>,
    /// Offset to pass as `from` to get the next page, `None` on the last page
    pub next_offset: Option<usize>,
}

impl MultiSearchPage {
    fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Json => serde_json::to_string(self),
            OutputFormat::Text => {
                let mut lines = self
                    .results
                    .iter()
                    .map(|result| result.render(format))
                    .collect::<Result<Vec<String>, _>>()?;
                match self.next_offset {
                    Some(offset) => lines.push(format!("next_offset;{offset}")),
                    None => lines.push("next_offset;/".to_string()),
                }
                Ok(lines.join("\n"))
            }
        }
    }
}

// The output is wrapped in a Result to allow matching on errors
// Returns an Iterator to the Reader of the lines of the file.
pub fn read_lines<P>(filename: P) -> io::Result<io::Lines<io::BufReader<File>>>
where
    P: AsRef<Path>,
{
    let file = File::open(filename)?;
    Ok(io::BufReader::new(file).lines())
}

/// Main run function that executes all the logic with the received arguments
pub fn run(args: Arguments) -> Result<(), Box<dyn Error>> {
    let start_time = Instant::now();
    let text = fs::read(&args.text_file)?;
    let index = SuffixArrayIndex::new(&text)?;

    info!(
        text_length = text.len(),
        heap_size = index.get_heap_size(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "index built"
    );

    if args.repeats {
        for line in describe_repeats(&index, &text) {
            println!("{line}");
        }
    }

    // option that only builds the index, but does not allow for querying (easy for benchmark purposes)
    if args.build_only {
        return Ok(());
    }

    let line_index = LineIndex::new(&text);
    let mut patterns: Vec<Vec<u8>> = args
        .pattern
        .iter()
        .map(|pattern| pattern.as_bytes().to_vec())
        .collect();
    if let Some(search_file) = &args.search_file {
        let lines = read_lines(search_file)?;
        for line in lines {
            patterns.push(line?.into_bytes());
        }
    }

    if patterns.is_empty() && args.search_file.is_none() {
        interactive_search(&index, &line_index, &args)
    } else {
        execute_search(&index, &line_index, &patterns, &args)
    }
}

/// Lines printed for `--repeats`
fn describe_repeats(index: &SuffixArrayIndex, text: &[u8]) -> Vec<String> {
    let longest = match index.longest_repeated_substring() {
        Some(repeat) => format!(
            "longest_repeat;{};{};{}",
            repeat.position,
            repeat.length,
            String::from_utf8_lossy(&text[repeat.position..repeat.position + repeat.length])
        ),
        None => "longest_repeat;/".to_string(),
    };
    vec![
        longest,
        format!("distinct_substrings;{}", index.distinct_substring_count()),
    ]
}

/// Perform the search for a batch of patterns as set with the commandline arguments
fn execute_search(
    index: &SuffixArrayIndex,
    line_index: &LineIndex,
    patterns: &[Vec<u8>],
    args: &Arguments,
) -> Result<(), Box<dyn Error>> {
    let start_time = Instant::now();

    // Explicitly set the number of threads to use if the commandline argument was set
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads.get())
            .build_global()?;
    }

    if args.mode == SearchMode::Multi {
        let patterns: Vec<&[u8]> = patterns.iter().map(|pattern| strip_line_end(pattern)).collect();
        let page = handle_multi_search(index, line_index, &patterns, args.from, args.cutoff);
        println!("{}", page.render(args.format)?);
    } else {
        let results = patterns
            .par_iter()
            .map(|pattern| handle_search_word(index, line_index, pattern, args.mode, args.cutoff))
            // collect is needed to keep the output in the same order as the input
            .collect::<Vec<PatternResult>>();

        for result in &results {
            println!("{}", result.render(args.format)?);
        }
    }

    info!(
        patterns = patterns.len(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "searched all patterns"
    );

    Ok(())
}

/// Read patterns from stdin until the input is closed
///
/// In `multi` mode every line is split on whitespace and the parts are searched together. An
/// empty line then shows the next page of the previous search.
fn interactive_search(
    index: &SuffixArrayIndex,
    line_index: &LineIndex,
    args: &Arguments,
) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    // patterns of the last multi search and where its next page starts
    let mut previous: Option<(Vec<Vec<u8>>, usize)> = None;

    loop {
        print!("Input your search string: ");
        io::stdout().flush()?;

        // patterns are bytes like the text, they don't have to be valid UTF-8
        let mut word = Vec::new();
        if stdin.lock().read_until(b'\n', &mut word)? == 0 {
            println!();
            return Ok(());
        }

        if args.mode != SearchMode::Multi {
            let result = handle_search_word(index, line_index, &word, args.mode, args.cutoff);
            println!("{}", result.render(args.format)?);
            continue;
        }

        let patterns: Vec<Vec<u8>> = word
            .split(|byte| byte.is_ascii_whitespace())
            .filter(|pattern| !pattern.is_empty())
            .map(|pattern| pattern.to_vec())
            .collect();

        let (patterns, from) = if patterns.is_empty() {
            match previous.take() {
                Some(next_page) => next_page,
                None => continue,
            }
        } else {
            (patterns, args.from)
        };

        let search_strings: Vec<&[u8]> = patterns.iter().map(|pattern| pattern.as_slice()).collect();
        let page = handle_multi_search(index, line_index, &search_strings, from, args.cutoff);
        println!("{}", page.render(args.format)?);

        previous = page.next_offset.map(|next_offset| (patterns, next_offset));
    }
}

fn strip_line_end(word: &[u8]) -> &[u8] {
    let word = word.strip_suffix(b"\n").unwrap_or(word);
    word.strip_suffix(b"\r").unwrap_or(word)
}

/// Converts text offsets to occurrences, offsets at the very end of the text have no line and are left out
fn to_occurrences(
    line_index: &LineIndex,
    offsets: &[usize],
    pattern_length: usize,
) -> Vec<Occurrence> {
    offsets
        .iter()
        .filter_map(|&offset| {
            let (line, column) = line_index.line_and_column(offset)?;
            let line_text = line_index.line_text(line)?;
            let end_column = (column + pattern_length).min(line_text.len()).max(column);
            Some(Occurrence {
                offset,
                line,
                column,
                end_column,
                line_text: String::from_utf8_lossy(line_text).into_owned(),
            })
        })
        .collect()
}

/// Executes the kind of search indicated by the commandline arguments
pub fn handle_search_word(
    index: &SuffixArrayIndex,
    line_index: &LineIndex,
    word: &[u8],
    search_mode: SearchMode,
    cutoff: usize,
) -> PatternResult {
    let word = strip_line_end(word);
    let pattern = String::from_utf8_lossy(word).into_owned();
    debug!(pattern = %pattern, mode = ?search_mode, "searching pattern");

    let outcome = match search_mode {
        SearchMode::Range => SearchOutcome::Range {
            range: index.match_pattern(word).range(),
        },
        SearchMode::Bounds => SearchOutcome::Bounds {
            bounds: match index.search_bounds(word) {
                BoundSearchResult::NoMatches => None,
                BoundSearchResult::SearchResult(bounds) => Some(bounds),
            },
        },
        SearchMode::Count => SearchOutcome::Count {
            count: index.count(word),
        },
        // the empty pattern has no place in the text to show
        SearchMode::Locate | SearchMode::Multi if word.is_empty() => SearchOutcome::Locate {
            occurrences: vec![],
            cutoff_reached: false,
        },
        SearchMode::Locate | SearchMode::Multi => {
            let (offsets, cutoff_reached) = match index.search_matching_suffixes(word, cutoff) {
                SearchAllSuffixesResult::NoMatches => (vec![], false),
                SearchAllSuffixesResult::MaxMatches(offsets) => (offsets, true),
                SearchAllSuffixesResult::SearchResult(offsets) => (offsets, false),
            };
            SearchOutcome::Locate {
                occurrences: to_occurrences(line_index, &offsets, word.len()),
                cutoff_reached,
            }
        }
    };

    PatternResult { pattern, outcome }
}

/// Searches all `patterns` together and keeps the first `cutoff` occurrences at or after `from` in text order
///
/// Every pattern is searched once, a pattern that is given again is left out of the results.
pub fn handle_multi_search(
    index: &SuffixArrayIndex,
    line_index: &LineIndex,
    patterns: &[&[u8]],
    from: usize,
    cutoff: usize,
) -> MultiSearchPage {
    let mut seen = HashSet::new();
    let unique: Vec<&[u8]> = patterns
        .iter()
        .copied()
        .filter(|pattern| seen.insert(*pattern))
        .collect();

    let page = index.search_patterns(&unique, from, cutoff);
    let cutoff_reached = page.next_offset.is_some();

    let results = unique
        .iter()
        .zip(page.matches)
        .map(|(pattern, offsets)| PatternResult {
            pattern: String::from_utf8_lossy(pattern).into_owned(),
            outcome: SearchOutcome::Locate {
                occurrences: to_occurrences(line_index, &offsets, pattern.len()),
                cutoff_reached,
            },
        })
        .collect();

    MultiSearchPage {
        results,
        next_offset: page.next_offset,
    }
}

#[cfg(test)]
mod tests {
    use suffixarray::{RankRange, SuffixArrayIndex};

    use crate::line_index::LineIndex;
    use crate::{
        describe_repeats, handle_multi_search, handle_search_word, Occurrence, OutputFormat,
        PatternResult, SearchMode, SearchOutcome,
    };

    const TEXT: &[u8] = b"banana\nbandana\n";

    fn occurrence(
        offset: usize,
        line: usize,
        column: usize,
        length: usize,
        line_text: &str,
    ) -> Occurrence {
        Occurrence {
            offset,
            line,
            column,
            end_column: column + length,
            line_text: line_text.to_string(),
        }
    }

    /// The offsets of a locate outcome
    fn offsets(outcome: &SearchOutcome) -> Vec<usize> {
        match outcome {
            SearchOutcome::Locate { occurrences, .. } => {
                occurrences.iter().map(|occurrence| occurrence.offset).collect()
            }
            _ => panic!("expected a locate outcome"),
        }
    }

    #[test]
    fn test_locate() {
        let index = SuffixArrayIndex::new(TEXT).unwrap();
        let line_index = LineIndex::new(TEXT);

        let result = handle_search_word(&index, &line_index, b"ban\n", SearchMode::Locate, 100);
        assert_eq!(
            result,
            PatternResult {
                pattern: "ban".to_string(),
                outcome: SearchOutcome::Locate {
                    occurrences: vec![
                        occurrence(0, 0, 0, 3, "banana"),
                        occurrence(7, 1, 0, 3, "bandana")
                    ],
                    cutoff_reached: false,
                },
            }
        );
        assert_eq!(
            result.render(OutputFormat::Text).unwrap(),
            "ban;2;1:1,2:1\n  1:1 [ban]ana\n  2:1 [ban]dana"
        );
    }

    #[test]
    fn test_locate_highlights_match_in_line() {
        let index = SuffixArrayIndex::new(TEXT).unwrap();
        let line_index = LineIndex::new(TEXT);

        let result = handle_search_word(&index, &line_index, b"dan", SearchMode::Locate, 100);
        assert_eq!(
            result.render(OutputFormat::Text).unwrap(),
            "dan;1;2:4\n  2:4 ban[dan]a"
        );
        assert_eq!(
            result.render(OutputFormat::Json).unwrap(),
            concat!(
                r#"{"pattern":"dan","mode":"locate","occurrences":[{"offset":10,"line":1,"#,
                r#""column":3,"end_column":6,"line_text":"bandana"}],"cutoff_reached":false}"#
            )
        );

        // a match over the line end is cut at the end of its first line
        let result = handle_search_word(&index, &line_index, b"na\nb", SearchMode::Locate, 100);
        assert_eq!(
            result.outcome,
            SearchOutcome::Locate {
                occurrences: vec![occurrence(4, 0, 4, 2, "banana")],
                cutoff_reached: false,
            }
        );
    }

    #[test]
    fn test_locate_cutoff() {
        let index = SuffixArrayIndex::new(TEXT).unwrap();
        let line_index = LineIndex::new(TEXT);

        let result = handle_search_word(&index, &line_index, b"an", SearchMode::Locate, 2);
        let SearchOutcome::Locate {
            occurrences,
            cutoff_reached,
        } = &result.outcome
        else {
            panic!("expected a locate outcome");
        };
        assert_eq!(occurrences.len(), 2);
        assert!(*cutoff_reached);
        assert!(result.render(OutputFormat::Text).unwrap().starts_with("an;2+;"));
    }

    #[test]
    fn test_locate_empty_pattern() {
        let index = SuffixArrayIndex::new(TEXT).unwrap();
        let line_index = LineIndex::new(TEXT);

        for word in [&b""[..], &b"\n"[..], &b"\r\n"[..]] {
            let result = handle_search_word(&index, &line_index, word, SearchMode::Locate, 2);
            assert_eq!(
                result.outcome,
                SearchOutcome::Locate {
                    occurrences: vec![],
                    cutoff_reached: false,
                }
            );
            assert_eq!(result.render(OutputFormat::Text).unwrap(), ";0;");
        }

        // counting still includes every suffix
        let count = handle_search_word(&index, &line_index, b"", SearchMode::Count, 2);
        assert_eq!(count.outcome, SearchOutcome::Count { count: TEXT.len() + 1 });
    }

    #[test]
    fn test_non_utf8_pattern() {
        let text = b"caf\xe9 au lait\n";
        let index = SuffixArrayIndex::new(text).unwrap();
        let line_index = LineIndex::new(text);

        let result = handle_search_word(&index, &line_index, b"f\xe9\n", SearchMode::Locate, 10);
        assert_eq!(offsets(&result.outcome), vec![2]);
        assert_eq!(result.pattern, "f\u{fffd}");
    }

    #[test]
    fn test_range_bounds_and_count() {
        let index = SuffixArrayIndex::new(b"banana").unwrap();
        let line_index = LineIndex::new(b"banana");

        let range = handle_search_word(&index, &line_index, b"ana", SearchMode::Range, 10);
        assert_eq!(
            range.outcome,
            SearchOutcome::Range {
                range: Some(RankRange::new(2, 3))
            }
        );
        assert_eq!(range.render(OutputFormat::Text).unwrap(), "ana;2;3");

        let bounds = handle_search_word(&index, &line_index, b"ana", SearchMode::Bounds, 10);
        assert_eq!(bounds.render(OutputFormat::Text).unwrap(), "ana;2;4");

        let missing = handle_search_word(&index, &line_index, b"xyz", SearchMode::Bounds, 10);
        assert_eq!(missing.render(OutputFormat::Text).unwrap(), "xyz;/");

        let count = handle_search_word(&index, &line_index, b"a", SearchMode::Count, 10);
        assert_eq!(count.outcome, SearchOutcome::Count { count: 3 });
    }

    #[test]
    fn test_json_output() {
        let index = SuffixArrayIndex::new(b"banana").unwrap();
        let line_index = LineIndex::new(b"banana");

        let count = handle_search_word(&index, &line_index, b"na", SearchMode::Count, 10);
        assert_eq!(
            count.render(OutputFormat::Json).unwrap(),
            r#"{"pattern":"na","mode":"count","count":2}"#
        );

        let range = handle_search_word(&index, &line_index, b"q", SearchMode::Range, 10);
        assert_eq!(
            range.render(OutputFormat::Json).unwrap(),
            r#"{"pattern":"q","mode":"range","range":null}"#
        );
    }

    #[test]
    fn test_multi_search() {
        let index = SuffixArrayIndex::new(TEXT).unwrap();
        let line_index = LineIndex::new(TEXT);

        let patterns: Vec<&[u8]> = vec![&b"band"[..], &b"nan"[..], &b"x"[..]];
        let page = handle_multi_search(&index, &line_index, &patterns, 0, 100);
        assert_eq!(page.next_offset, None);
        assert_eq!(page.results.len(), 3);
        assert_eq!(
            page.results[0].outcome,
            SearchOutcome::Locate {
                occurrences: vec![occurrence(7, 1, 0, 4, "bandana")],
                cutoff_reached: false,
            }
        );
        assert_eq!(
            page.results[1].outcome,
            SearchOutcome::Locate {
                occurrences: vec![occurrence(2, 0, 2, 3, "banana")],
                cutoff_reached: false,
            }
        );
        assert_eq!(page.results[2].render(OutputFormat::Text).unwrap(), "x;0;");
        assert!(page.render(OutputFormat::Text).unwrap().ends_with("\nnext_offset;/"));
    }

    #[test]
    fn test_multi_search_pages() {
        let index = SuffixArrayIndex::new(TEXT).unwrap();
        let line_index = LineIndex::new(TEXT);

        // only the first occurrence in text order is kept
        let patterns: Vec<&[u8]> = vec![&b"band"[..], &b"nan"[..]];
        let first = handle_multi_search(&index, &line_index, &patterns, 0, 1);
        assert_eq!(first.next_offset, Some(7));
        assert_eq!(offsets(&first.results[0].outcome), Vec::<usize>::new());
        assert_eq!(offsets(&first.results[1].outcome), vec![2]);
        assert!(first.render(OutputFormat::Text).unwrap().ends_with("\nnext_offset;7"));

        let second = handle_multi_search(&index, &line_index, &patterns, 7, 1);
        assert_eq!(second.next_offset, None);
        assert_eq!(offsets(&second.results[0].outcome), vec![7]);
        assert_eq!(offsets(&second.results[1].outcome), Vec::<usize>::new());

        let json = second.render(OutputFormat::Json).unwrap();
        assert!(json.starts_with(r#"{"results":[{"pattern":"band","mode":"locate""#));
        assert!(json.ends_with(r#""next_offset":null}"#));
    }

    #[test]
    fn test_multi_search_ignores_duplicate_patterns() {
        let text = b"xan yan";
        let index = SuffixArrayIndex::new(text).unwrap();
        let line_index = LineIndex::new(text);

        let patterns: Vec<&[u8]> = vec![&b"an"[..], &b"an"[..], &b"y"[..]];
        let page = handle_multi_search(&index, &line_index, &patterns, 0, 2);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].pattern, "an");
        assert_eq!(offsets(&page.results[0].outcome), vec![1]);
        assert_eq!(page.results[1].pattern, "y");
        assert_eq!(offsets(&page.results[1].outcome), vec![4]);
        assert_eq!(page.next_offset, Some(5));
    }

    #[test]
    fn test_describe_repeats() {
        let index = SuffixArrayIndex::new(b"banana").unwrap();
        assert_eq!(
            describe_repeats(&index, b"banana"),
            vec!["longest_repeat;1;3;ana", "distinct_substrings;15"]
        );

        let index = SuffixArrayIndex::new(b"abc").unwrap();
        assert_eq!(
            describe_repeats(&index, b"abc"),
            vec!["longest_repeat;/", "distinct_substrings;6"]
        );
    }
}
