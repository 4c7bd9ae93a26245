use std::fmt::Display;

/// The reading-difficulty metrics gathered for a single ISBN lookup.
///
/// Each metric is independent; a provider that has no record of the book
/// leaves the field absent. Absence is an expected outcome, not an error,
/// and only becomes the `-1` sentinel in the raw render mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Lexile level as a whole number, `700` for a book listed as "700L".
    pub lexile: Option<i64>,
    /// ATOS readability level.
    pub atos: Option<f64>,
    /// Accelerated Reader quiz points.
    pub points: Option<f64>,
}

impl Report {
    /// Renders the report in the fixed order Lexile, ATOS level, AR points.
    ///
    /// With `raw` set the values print as bare numbers with `-1` standing in
    /// for an absent metric, otherwise each value is labeled and an absent
    /// metric prints as `Not found!`. Values are separated by `" | "` in
    /// label mode and `" "` in raw mode; `lines` puts each value on its own
    /// line in either mode.
    #[must_use]
    pub fn render(&self, raw: bool, lines: bool) -> String {
        let sep = if lines {
            "\n"
        } else if raw {
            " "
        } else {
            " | "
        };

        if raw {
            [
                raw_value(self.lexile),
                raw_value(self.atos),
                raw_value(self.points),
            ]
            .join(sep)
        } else {
            [
                format!("Lexile: {}", label_value(self.lexile)),
                format!("Atos Level: {}", label_value(self.atos)),
                format!("AR Points: {}", label_value(self.points)),
            ]
            .join(sep)
        }
    }
}

fn raw_value<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-1".to_owned(), |v| v.to_string())
}

fn label_value<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "Not found!".to_owned(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::Report;

    const FOUND: Report = Report {
        lexile: Some(700),
        atos: Some(4.5),
        points: Some(3.0),
    };

    const MISSING: Report = Report {
        lexile: None,
        atos: None,
        points: None,
    };

    #[test]
    fn labeled_report_uses_pipe_separators() {
        assert_eq!(
            "Lexile: 700 | Atos Level: 4.5 | AR Points: 3",
            FOUND.render(false, false)
        );
    }

    #[test]
    fn missing_metrics_render_as_not_found_in_label_mode() {
        assert_eq!(
            "Lexile: Not found! | Atos Level: Not found! | AR Points: Not found!",
            MISSING.render(false, false)
        );
    }

    #[test]
    fn raw_report_is_space_separated_numbers() {
        assert_eq!("700 4.5 3", FOUND.render(true, false));
    }

    #[test]
    fn missing_metrics_render_as_sentinel_in_raw_mode() {
        assert_eq!("-1 -1 -1", MISSING.render(true, false));
    }

    #[test]
    fn line_mode_puts_each_labeled_metric_on_its_own_line() {
        let lines: Vec<_> = FOUND.render(false, true).lines().map(str::to_owned).collect();
        assert_eq!(
            vec!["Lexile: 700", "Atos Level: 4.5", "AR Points: 3"],
            lines
        );
    }

    #[test]
    fn line_mode_applies_to_raw_output_too() {
        assert_eq!("700\n4.5\n3", FOUND.render(true, true));
    }

    #[test]
    fn metrics_are_independent() {
        let partial = Report {
            lexile: None,
            atos: Some(4.5),
            points: None,
        };
        assert_eq!("-1 4.5 -1", partial.render(true, false));
        assert_eq!(
            "Lexile: Not found! | Atos Level: 4.5 | AR Points: Not found!",
            partial.render(false, false)
        );
    }
}
