//! Job-table loading: whitespace-separated `minute hour task` lines.

/// One raw job record, fields exactly as they appeared in the table.
///
/// The time fields stay unparsed strings here so a record can hold the
/// wildcard `*` or garbage alike; validation happens at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEntry {
    pub minute: String,
    pub hour: String,
    pub task: String,
}

impl TabEntry {
    pub fn new(minute: impl Into<String>, hour: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            minute: minute.into(),
            hour: hour.into(),
            task: task.into(),
        }
    }
}

/// A non-blank line that did not split into exactly three fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadLine {
    /// 1-based line number in the input.
    pub line: usize,
    pub text: String,
}

/// A loaded job table: entries in input order, plus the lines rejected on
/// the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tab {
    pub entries: Vec<TabEntry>,
    pub malformed: Vec<BadLine>,
}

/// Split table text into job records.
///
/// Blank lines are skipped silently. Any other line must carry exactly
/// three whitespace-separated fields; lines that do not are collected in
/// [`Tab::malformed`] rather than aborting the load.
pub fn parse(input: &str) -> Tab {
    let mut entries = Vec::new();
    let mut malformed = Vec::new();

    for (i, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            malformed.push(BadLine {
                line: i + 1,
                text: line.to_string(),
            });
            continue;
        }
        entries.push(TabEntry::new(fields[0], fields[1], fields[2]));
    }

    Tab { entries, malformed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_is_minute_hour_task() {
        let tab = parse("30 1 /bin/backup\n");
        assert_eq!(tab.entries, [TabEntry::new("30", "1", "/bin/backup")]);
        assert!(tab.malformed.is_empty());
    }

    #[test]
    fn test_wildcards_pass_through_unchanged() {
        let tab = parse("* * tick\n");
        assert_eq!(tab.entries, [TabEntry::new("*", "*", "tick")]);
    }

    #[test]
    fn test_tabs_and_runs_of_spaces_split_like_single_spaces() {
        let tab = parse("  30\t 1   /bin/backup \n");
        assert_eq!(tab.entries, [TabEntry::new("30", "1", "/bin/backup")]);
    }

    #[test]
    fn test_blank_lines_skipped_silently() {
        let tab = parse("\n30 1 a\n\n   \n45 * b\n");
        assert_eq!(tab.entries.len(), 2);
        assert!(tab.malformed.is_empty());
    }

    #[test]
    fn test_too_few_fields_collected() {
        let tab = parse("30 1\n");
        assert!(tab.entries.is_empty());
        assert_eq!(
            tab.malformed,
            [BadLine {
                line: 1,
                text: "30 1".to_string()
            }]
        );
    }

    #[test]
    fn test_too_many_fields_collected() {
        // A task with embedded whitespace is four fields, not a quoted task.
        let tab = parse("30 1 run me\n");
        assert!(tab.entries.is_empty());
        assert_eq!(tab.malformed.len(), 1);
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let tab = parse("30 1 a\n\nbogus\n");
        assert_eq!(tab.malformed, [BadLine {
            line: 3,
            text: "bogus".to_string()
        }]);
    }

    #[test]
    fn test_bad_lines_do_not_stop_the_load() {
        let tab = parse("bogus\n30 1 a\nalso bogus\n45 * b\n");
        assert_eq!(tab.entries.len(), 2);
        assert_eq!(tab.malformed.len(), 2);
        assert_eq!(tab.entries[0].task, "a");
        assert_eq!(tab.entries[1].task, "b");
    }

    #[test]
    fn test_entries_keep_input_order() {
        let tab = parse("0 1 first\n0 2 second\n0 3 third\n");
        let tasks: Vec<&str> = tab.entries.iter().map(|e| e.task.as_str()).collect();
        assert_eq!(tasks, ["first", "second", "third"]);
    }

    #[test]
    fn test_empty_input_is_an_empty_tab() {
        let tab = parse("");
        assert!(tab.entries.is_empty());
        assert!(tab.malformed.is_empty());
    }

    #[test]
    fn test_missing_trailing_newline_still_parses() {
        let tab = parse("30 1 a");
        assert_eq!(tab.entries.len(), 1);
    }
}
