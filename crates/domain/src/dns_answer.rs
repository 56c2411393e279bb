use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionEntry {
    pub name: String,
    pub class: String,
    pub record_type: String,
}

/// One resource record, already rendered to text by the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry {
    pub name: String,
    pub ttl: u32,
    pub class: String,
    pub record_type: String,
    pub data: String,
}

/// Decoded DNS response, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswer {
    pub id: u16,
    pub response_code: &'static str,
    pub truncated: bool,
    pub recursion_available: bool,
    pub questions: Vec<QuestionEntry>,
    pub answers: Vec<RecordEntry>,
    pub authority: Vec<RecordEntry>,
    pub additional_count: usize,
}

impl DnsAnswer {
    /// Answer records of the given type (e.g. `"A"`).
    pub fn answers_of_type<'a>(&'a self, record_type: &'a str) -> impl Iterator<Item = &'a RecordEntry> {
        self.answers
            .iter()
            .filter(move |record| record.record_type == record_type)
    }
}

impl fmt::Display for RecordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.name, self.ttl, self.class, self.record_type, self.data
        )
    }
}

impl fmt::Display for DnsAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            ";; ->>HEADER<<- status: {}, id: {}",
            self.response_code, self.id
        )?;

        let mut flags = vec!["qr"];
        if self.truncated {
            flags.push("tc");
        }
        if self.recursion_available {
            flags.push("ra");
        }
        writeln!(
            f,
            ";; flags: {}; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            flags.join(" "),
            self.questions.len(),
            self.answers.len(),
            self.authority.len(),
            self.additional_count
        )?;

        writeln!(f)?;
        writeln!(f, ";; QUESTION SECTION:")?;
        for question in &self.questions {
            writeln!(
                f,
                ";{}\t{}\t{}",
                question.name, question.class, question.record_type
            )?;
        }

        if !self.answers.is_empty() {
            writeln!(f)?;
            writeln!(f, ";; ANSWER SECTION:")?;
            for record in &self.answers {
                writeln!(f, "{}", record)?;
            }
        }

        if !self.authority.is_empty() {
            writeln!(f)?;
            writeln!(f, ";; AUTHORITY SECTION:")?;
            for record in &self.authority {
                writeln!(f, "{}", record)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DnsAnswer {
        DnsAnswer {
            id: 4242,
            response_code: "NOERROR",
            truncated: false,
            recursion_available: true,
            questions: vec![QuestionEntry {
                name: "example.com.".into(),
                class: "IN".into(),
                record_type: "A".into(),
            }],
            answers: vec![RecordEntry {
                name: "example.com.".into(),
                ttl: 300,
                class: "IN".into(),
                record_type: "A".into(),
                data: "93.184.215.14".into(),
            }],
            authority: vec![],
            additional_count: 0,
        }
    }

    #[test]
    fn test_display_sections() {
        let rendered = sample().to_string();

        assert!(rendered.contains("status: NOERROR, id: 4242"));
        assert!(rendered.contains("flags: qr ra; QUERY: 1, ANSWER: 1"));
        assert!(rendered.contains(";example.com.\tIN\tA"));
        assert!(rendered.contains("example.com.\t300\tIN\tA\t93.184.215.14"));
        assert!(!rendered.contains("AUTHORITY SECTION"));
    }

    #[test]
    fn test_answers_of_type() {
        let answer = sample();
        assert_eq!(answer.answers_of_type("A").count(), 1);
        assert_eq!(answer.answers_of_type("MX").count(), 0);
        assert_eq!(answer.response_code, "NOERROR");
    }

    #[test]
    fn test_display_ends_with_single_newline() {
        let rendered = sample().to_string();
        assert!(rendered.ends_with('\n'));
        assert!(!rendered.ends_with("\n\n"));
    }
}
