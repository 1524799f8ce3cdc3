use crate::model::QuestionRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary counts over a question bank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BankStats {
    pub total: usize,
    /// Questions per topic, ascending by topic.
    pub by_topic: BTreeMap<u32, usize>,
    pub with_explanation: usize,
    /// Questions per option count, ascending by option count.
    pub by_option_count: BTreeMap<usize, usize>,
}

impl BankStats {
    pub fn from_records(records: &[QuestionRecord]) -> Self {
        let mut stats = BankStats {
            total: records.len(),
            ..BankStats::default()
        };

        for record in records {
            *stats.by_topic.entry(record.topic).or_default() += 1;
            *stats.by_option_count.entry(record.options.len()).or_default() += 1;
            if record.explanation.is_some() {
                stats.with_explanation += 1;
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OptionLetter, OptionMap};

    fn record(topic: u32, option_count: usize, explained: bool) -> QuestionRecord {
        let options: OptionMap = OptionLetter::ALL
            .iter()
            .take(option_count)
            .map(|l| (*l, l.to_string()))
            .collect();
        QuestionRecord {
            id: 1,
            topic,
            question: "q".into(),
            options,
            answer: vec![OptionLetter::A],
            explanation: explained.then(|| "long enough explanation text".to_string()),
        }
    }

    #[test]
    fn test_counts() {
        let records = vec![
            record(2, 4, true),
            record(1, 4, false),
            record(2, 5, true),
        ];
        let stats = BankStats::from_records(&records);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.with_explanation, 2);
        assert_eq!(stats.by_topic.into_iter().collect::<Vec<_>>(), vec![(1, 1), (2, 2)]);
        assert_eq!(
            stats.by_option_count.into_iter().collect::<Vec<_>>(),
            vec![(4, 2), (5, 1)]
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(BankStats::from_records(&[]), BankStats::default());
    }
}
