use std::{fmt, io};

use clap::ValueEnum;
use graphql_schema_comparator::{Change, Criticality};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// One line per change, followed by a summary
    Text,
    /// A JSON document with every change and a summary
    Json,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub(crate) enum FailOn {
    /// Fail when a breaking change is found
    Breaking,
    /// Fail when a breaking or dangerous change is found
    Dangerous,
    /// Never fail because of the changes
    Never,
}

impl FailOn {
    fn threshold(self) -> Option<Criticality> {
        match self {
            FailOn::Breaking => Some(Criticality::Breaking),
            FailOn::Dangerous => Some(Criticality::Dangerous),
            FailOn::Never => None,
        }
    }

    /// Whether any of the changes reaches the threshold.
    pub(crate) fn is_met(self, changes: &[Change<'_>]) -> bool {
        let Some(threshold) = self.threshold() else {
            return false;
        };

        changes.iter().any(|change| change.criticality() >= threshold)
    }
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct Report {
    changes: Vec<Entry>,
    summary: Summary,
}

#[derive(Debug, serde::Serialize)]
struct Entry {
    criticality: Criticality,
    path: String,
    message: String,
}

#[derive(Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    breaking: usize,
    dangerous: usize,
    non_breaking: usize,
}

impl Report {
    pub(crate) fn new(changes: &[Change<'_>]) -> Self {
        let mut summary = Summary::default();

        let changes = changes
            .iter()
            .map(|change| {
                let criticality = change.criticality();

                match criticality {
                    Criticality::Breaking => summary.breaking += 1,
                    Criticality::Dangerous => summary.dangerous += 1,
                    Criticality::NonBreaking => summary.non_breaking += 1,
                }

                Entry {
                    criticality,
                    path: change.path(),
                    message: change.to_string(),
                }
            })
            .collect();

        Report { changes, summary }
    }

    pub(crate) fn write(&self, out: &mut impl io::Write, format: Format) -> anyhow::Result<()> {
        match format {
            Format::Text => write!(out, "{self}")?,
            Format::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.changes.is_empty() {
            return writeln!(f, "No changes.");
        }

        for entry in &self.changes {
            writeln!(f, "{:<14}{}", entry.criticality.as_str(), entry.message)?;
        }

        let Summary {
            breaking,
            dangerous,
            non_breaking,
        } = &self.summary;
        let noun = if self.changes.len() == 1 { "change" } else { "changes" };

        writeln!(f)?;
        writeln!(
            f,
            "{} {noun}: {breaking} breaking, {dangerous} dangerous, {non_breaking} non-breaking",
            self.changes.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_schema_comparator::{diff, Schema};
    use indoc::indoc;

    fn schemas() -> (Schema, Schema) {
        let old = Schema::from_sdl(indoc! {"
            type Query {
              a: String
              b: Int
            }

            enum Role { A }
        "})
        .unwrap();

        let new = Schema::from_sdl(indoc! {"
            type Query {
              a: String!
              c: Int
            }

            enum Role { A B }
        "})
        .unwrap();

        (old, new)
    }

    fn render(report: &Report, format: Format) -> String {
        let mut out = Vec::new();
        report.write(&mut out, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text() {
        let (old, new) = schemas();
        let report = Report::new(&diff(&old, &new));

        insta::assert_snapshot!(render(&report, Format::Text).trim_end(), @r"
        breaking      Field `b` was removed from object type `Query`
        non-breaking  Field `c` was added to object type `Query`
        non-breaking  Type of field `Query.a` changed from `String` to `String!`
        dangerous     Enum value `B` was added to enum `Role`

        4 changes: 1 breaking, 1 dangerous, 2 non-breaking
        ");
    }

    #[test]
    fn text_without_changes() {
        let (old, _) = schemas();
        let report = Report::new(&diff(&old, &old));

        assert_eq!(render(&report, Format::Text), "No changes.\n");
    }

    #[test]
    fn json() {
        let (old, new) = schemas();
        let report = Report::new(&diff(&old, &new));

        let value: serde_json::Value = serde_json::from_str(&render(&report, Format::Json)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "changes": [
                    {
                        "criticality": "breaking",
                        "path": "Query.b",
                        "message": "Field `b` was removed from object type `Query`"
                    },
                    {
                        "criticality": "non-breaking",
                        "path": "Query.c",
                        "message": "Field `c` was added to object type `Query`"
                    },
                    {
                        "criticality": "non-breaking",
                        "path": "Query.a",
                        "message": "Type of field `Query.a` changed from `String` to `String!`"
                    },
                    {
                        "criticality": "dangerous",
                        "path": "Role.B",
                        "message": "Enum value `B` was added to enum `Role`"
                    }
                ],
                "summary": {
                    "breaking": 1,
                    "dangerous": 1,
                    "nonBreaking": 2
                }
            })
        );
    }

    #[test]
    fn fail_on() {
        let (old, new) = schemas();
        let changes = diff(&old, &new);
        let dangerous_only = &changes[3..];

        assert!(FailOn::Breaking.is_met(&changes));
        assert!(!FailOn::Breaking.is_met(dangerous_only));
        assert!(FailOn::Dangerous.is_met(dangerous_only));
        assert!(!FailOn::Dangerous.is_met(&changes[1..3]));
        assert!(!FailOn::Never.is_met(&changes));
        assert!(!FailOn::Breaking.is_met(&[]));
    }
}
