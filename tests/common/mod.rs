#![allow(dead_code)]

use std::collections::BTreeMap;
use std::io::Write;

use essay_retrieval::knowledge::{ComponentValue, Essay, KnowledgeStore};
use tempfile::NamedTempFile;

pub fn single(text: &str) -> ComponentValue {
    ComponentValue::Single(text.to_string())
}

pub fn many(items: &[&str]) -> ComponentValue {
    ComponentValue::Many(items.iter().map(|s| s.to_string()).collect())
}

pub fn essay(
    id: &str,
    topic: &str,
    band_score: f64,
    components: Vec<(&str, ComponentValue)>,
) -> Essay {
    Essay {
        id: id.to_string(),
        topic: topic.to_string(),
        band_score,
        components: components
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect::<BTreeMap<_, _>>(),
    }
}

pub fn technology_essay(band_score: f64) -> Essay {
    essay(
        "tech-education",
        "Technology in Education",
        band_score,
        vec![
            ("claim", single("Technology has transformed how students learn.")),
            (
                "data",
                many(&[
                    "Schools have standardized educational methods",
                    "National data shows online platforms let students study at their own pace",
                ]),
            ),
            ("warrant", single("Flexible access to material improves engagement.")),
        ],
    )
}

pub fn sample_essays() -> Vec<Essay> {
    vec![
        technology_essay(7.5),
        essay(
            "city-traffic",
            "Traffic Congestion in Cities",
            6.0,
            vec![
                ("claim", single("Public transport is the best answer to congestion.")),
                ("data", many(&["Bus lanes cut commute times in several capitals"])),
            ],
        ),
        essay(
            "global-tourism",
            "The Impact of Global Tourism",
            8.0,
            vec![
                (
                    "claim",
                    single("Tourism brings more benefits than drawbacks to the host country."),
                ),
                ("rebuttal", single("Overcrowding damages fragile environments.")),
            ],
        ),
        essay(
            "remote-work",
            "Remote Work and Productivity",
            7.0,
            vec![
                ("claim", single("Working from home raises productivity.")),
                ("data", single("Surveys show fewer interruptions at home")),
            ],
        ),
    ]
}

pub fn sample_store() -> KnowledgeStore {
    KnowledgeStore::from_essays(sample_essays())
}

pub fn write_corpus(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp corpus");
    file.write_all(json.as_bytes()).expect("write temp corpus");
    file.flush().expect("flush temp corpus");
    file
}

pub const SAMPLE_CORPUS_JSON: &str = r#"{
  "essays": [
    {
      "id": "tech-education",
      "topic": "Technology in Education",
      "band_score": 7.5,
      "components": {
        "claim": "Technology has transformed how students learn.",
        "data": [
          "Schools have standardized educational methods",
          "National data shows online platforms let students study at their own pace"
        ]
      }
    },
    {
      "topic": "Traffic Congestion in Cities",
      "band_score": 6,
      "components": { "claim": "Public transport is the best answer to congestion." }
    }
  ]
}"#;
