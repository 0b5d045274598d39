//! Field report ("témoignage") and its mailto link

use chrono::NaiveDateTime;

/// Urgency used when none is selected
pub const UNSPECIFIED_URGENCY: &str = "Non spécifié";

/// Date text used when none is given
pub const UNSPECIFIED_DATE: &str = "Non précisée";

const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];
const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

const RULE: &str = "========================================";
const THIN_RULE: &str = "----------------------------------------";

/// Report building error
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Datetime is not `YYYY-MM-DDTHH:MM`
    #[error("invalid report datetime {value:?}: {source}")]
    InvalidDatetime {
        /// Text as submitted
        value: String,
        /// Parse failure for the last accepted format
        #[source]
        source: chrono::ParseError,
    },
}

/// A witness report as submitted from the transmission form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Testimony {
    codename: String,
    location: String,
    phenomenon: String,
    report: String,
    datetime: Option<String>,
    urgency: Option<String>,
}

impl Testimony {
    /// Report with the mandatory fields; free text is trimmed
    #[must_use]
    pub fn new(codename: &str, location: &str, phenomenon: &str, report: &str) -> Self {
        Self {
            codename: codename.trim().to_string(),
            location: location.trim().to_string(),
            phenomenon: phenomenon.to_string(),
            report: report.trim().to_string(),
            datetime: None,
            urgency: None,
        }
    }

    /// With an observation time, `YYYY-MM-DDTHH:MM`
    #[must_use]
    pub fn with_datetime(mut self, datetime: impl Into<String>) -> Self {
        self.datetime = Some(datetime.into());
        self
    }

    /// With a selected urgency level
    #[must_use]
    pub fn with_urgency(mut self, urgency: impl Into<String>) -> Self {
        self.urgency = Some(urgency.into());
        self
    }

    /// Witness code name, trimmed
    #[must_use]
    pub fn codename(&self) -> &str {
        &self.codename
    }

    /// Selected urgency or [`UNSPECIFIED_URGENCY`]
    #[must_use]
    pub fn urgency(&self) -> &str {
        self.urgency.as_deref().unwrap_or(UNSPECIFIED_URGENCY)
    }

    /// Observation time as `DD/MM/YYYY HH:MM`, or [`UNSPECIFIED_DATE`]
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidDatetime`] when a non-empty value
    /// matches no accepted format.
    pub fn formatted_datetime(&self) -> Result<String, ReportError> {
        let Some(raw) = self.datetime.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(UNSPECIFIED_DATE.to_string());
        };

        let mut last_error = None;
        for format in INPUT_FORMATS {
            match NaiveDateTime::parse_from_str(raw, format) {
                Ok(parsed) => return Ok(parsed.format(DISPLAY_FORMAT).to_string()),
                Err(e) => last_error = Some(e),
            }
        }

        match last_error {
            Some(source) => Err(ReportError::InvalidDatetime {
                value: raw.to_string(),
                source,
            }),
            None => Ok(UNSPECIFIED_DATE.to_string()),
        }
    }

    /// Mail subject line
    #[must_use]
    pub fn subject(&self) -> String {
        format!(
            "[TRASK] Signalement {} — {} — {}",
            self.urgency(),
            self.phenomenon,
            self.codename
        )
    }

    /// Mail body, fixed surveillance report layout
    ///
    /// # Errors
    ///
    /// Propagates [`Testimony::formatted_datetime`] failures.
    pub fn body(&self) -> Result<String, ReportError> {
        let date = self.formatted_datetime()?;
        Ok(format!(
            "{RULE}\n\
             \x20 RAPPORT DE SURVEILLANCE — TRASK INDUSTRIES\n\
             {RULE}\n\
             \n\
             NOM DE CODE : {codename}\n\
             LIEU : {location}\n\
             DATE / HEURE : {date}\n\
             TYPE DE PHÉNOMÈNE : {phenomenon}\n\
             NIVEAU D'URGENCE : {urgency}\n\
             \n\
             {THIN_RULE}\n\
             RAPPORT DÉTAILLÉ :\n\
             {THIN_RULE}\n\
             \n\
             {report}\n\
             \n\
             {RULE}\n\
             Transmission via Protocole Sentinelle.\n\
             {RULE}",
            codename = self.codename,
            location = self.location,
            phenomenon = self.phenomenon,
            urgency = self.urgency(),
            report = self.report,
        ))
    }

    /// `mailto:` link with percent-encoded subject and body
    ///
    /// # Errors
    ///
    /// Propagates [`Testimony::formatted_datetime`] failures.
    pub fn mailto_link(&self, recipient: &str) -> Result<String, ReportError> {
        let body = self.body()?;
        tracing::info!(codename = %self.codename, urgency = %self.urgency(), "Prepared field report");
        Ok(format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&body)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Testimony {
        Testimony::new("  Corbeau ", " Brooklyn ", "Télékinésie", "\n Objets en lévitation. \n")
    }

    #[test]
    fn defaults_for_missing_selections() {
        let testimony = sample();

        assert_eq!(testimony.urgency(), "Non spécifié");
        assert_eq!(testimony.formatted_datetime().unwrap(), "Non précisée");
        assert_eq!(
            testimony.subject(),
            "[TRASK] Signalement Non spécifié — Télékinésie — Corbeau"
        );
    }

    #[test]
    fn datetime_is_reformatted() {
        let testimony = sample().with_datetime("2025-01-15T14:30");
        assert_eq!(testimony.formatted_datetime().unwrap(), "15/01/2025 14:30");

        let blank = sample().with_datetime("   ");
        assert_eq!(blank.formatted_datetime().unwrap(), UNSPECIFIED_DATE);
    }

    #[test]
    fn bad_datetime_is_an_error() {
        let err = sample().with_datetime("demain midi").mailto_link("a@b.c").unwrap_err();
        assert!(matches!(err, ReportError::InvalidDatetime { ref value, .. } if value == "demain midi"));
    }

    #[test]
    fn body_layout() {
        let body = sample()
            .with_urgency("Critique")
            .with_datetime("2025-06-25T09:05")
            .body()
            .unwrap();

        assert!(body.starts_with("========================================\n  RAPPORT DE SURVEILLANCE"));
        assert!(body.contains("NOM DE CODE : Corbeau\nLIEU : Brooklyn\n"));
        assert!(body.contains("DATE / HEURE : 25/06/2025 09:05\n"));
        assert!(body.contains("NIVEAU D'URGENCE : Critique\n"));
        assert!(body.contains("RAPPORT DÉTAILLÉ :\n----------------------------------------\n\nObjets en lévitation.\n"));
        assert!(body.ends_with("Transmission via Protocole Sentinelle.\n========================================"));
    }

    #[test]
    fn mailto_is_percent_encoded() {
        let link = sample().with_urgency("Haute").mailto_link("ops@example.org").unwrap();

        assert!(link.starts_with("mailto:ops@example.org?subject=%5BTRASK%5D%20Signalement%20Haute"));
        assert!(link.contains("&body="));
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
        assert!(link.contains("T%C3%A9l%C3%A9kin%C3%A9sie"));
    }
}
