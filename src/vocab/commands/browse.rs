use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayTopic, TopicSelector};
use crate::store::RegistryStore;

use super::helpers::topic_ref;

/// Shows a single topic together with its words.
pub fn run<S: RegistryStore>(store: &S, selector: &TopicSelector) -> Result<CmdResult> {
    let topics = store.load()?;
    let position = selector.position(&topics)?;
    let topic = topic_ref(&topics, selector)?;

    let mut result = CmdResult::default().with_listed_topics(vec![DisplayTopic {
        index: DisplayIndex::from_position(position),
        topic: topic.clone(),
    }]);
    if topic.words().is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Topic {} has no words yet.",
            topic.name()
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VocabError;
    use crate::store::memory::fixtures::store_with;

    #[test]
    fn browses_topic_by_number() {
        let store = store_with(&[("Animals", &["dog", "cat"]), ("Colors", &["red"])]);
        let result = run(&store, &"1".parse().unwrap()).unwrap();

        let shown = &result.listed_topics[0];
        assert_eq!(shown.index.get(), 1);
        assert_eq!(
            shown.topic.words().iter().collect::<Vec<_>>(),
            vec!["cat", "dog"]
        );
        assert!(result.messages.is_empty());
    }

    #[test]
    fn browses_topic_by_name_with_its_number() {
        let store = store_with(&[("Animals", &[]), ("Colors", &["red"])]);
        let result = run(&store, &"COLORS".parse().unwrap()).unwrap();
        assert_eq!(result.listed_topics[0].index.get(), 2);
    }

    #[test]
    fn empty_topic_reports_info() {
        let store = store_with(&[("Empty", &[])]);
        let result = run(&store, &"1".parse().unwrap()).unwrap();
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn out_of_range_number_is_not_found() {
        let store = store_with(&[("Animals", &[])]);
        assert!(matches!(
            run(&store, &"4".parse().unwrap()),
            Err(VocabError::TopicNotFound(_))
        ));
    }
}
