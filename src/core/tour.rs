use crate::core::fallible::demonstrate_error;
use crate::core::fetch::{fetch_pair, SimulatedFetcher};
use crate::core::file_manager::FileManager;
use crate::core::numbers::{length_notice, product, split_ends};
use crate::core::timing::Timed;
use crate::core::words::WordCount;
use crate::core::{FetchResult, Person, Result, TourSettings};
use crate::utils::transcript::Transcript;
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::PathBuf;

pub const NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];
pub const SENTENCE: &str = "the quick brown fox jumps over the lazy dog";

/// Everything the tour computed along the way.
#[derive(Debug, Clone)]
pub struct TourReport {
    pub people: Vec<Person>,
    pub skills_by_name: IndexMap<String, Vec<String>>,
    pub fetch_results: (FetchResult, FetchResult),
    pub all_skills: BTreeSet<String>,
    pub output_path: PathBuf,
    pub product: Option<i64>,
    pub head: Option<i64>,
    pub middle: Vec<i64>,
    pub tail: Option<i64>,
    pub word_count: WordCount,
}

pub struct TourEngine<S: TourSettings> {
    settings: S,
    transcript: Transcript,
}

impl<S: TourSettings> TourEngine<S> {
    pub fn new(settings: S, transcript: Transcript) -> Self {
        Self {
            settings,
            transcript,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Runs every step once, top to bottom. Only a division by zero is
    /// recovered from; any other error ends the run. A transcript that could
    /// not be echoed fails the run once all steps are done.
    pub async fn run(&self) -> Result<TourReport> {
        tracing::info!("Starting language tour");

        // Records
        let alice = Person::new("Alice", 30, ["Python", "AI"], &self.transcript);
        let bob = Person::new("Bob", 25, ["JavaScript", "Web Dev"], &self.transcript);
        let people = vec![alice, bob];

        let skills_by_name: IndexMap<String, Vec<String>> = people
            .iter()
            .map(|person| (person.name().to_string(), person.skills().to_vec()))
            .collect();
        tracing::debug!("Skills by name: {:?}", skills_by_name);

        // Concurrent fetches
        let fetcher = Timed::new(
            SimulatedFetcher::new(self.settings.fetch_delay(), self.transcript.clone()),
            self.transcript.clone(),
        );
        let fetch_results = fetch_pair(
            &fetcher,
            self.settings.primary_url(),
            self.settings.secondary_url(),
        )
        .await?;
        let results_json = serde_json::to_string(&fetch_results)?;
        tracing::debug!("Fetch results: {}", results_json);

        // Set union
        let alice_skills: BTreeSet<&str> = people[0].skills().iter().map(String::as_str).collect();
        let bob_skills: BTreeSet<&str> = people[1].skills().iter().map(String::as_str).collect();
        let all_skills: BTreeSet<String> = alice_skills
            .union(&bob_skills)
            .map(|skill| skill.to_string())
            .collect();
        tracing::debug!("All skills: {:?}", all_skills);

        // Error handling
        demonstrate_error(&self.transcript)?;

        // Scoped file write
        let manager = FileManager::new(self.settings.output_path());
        manager.with_file(|file| {
            file.write_all(self.settings.message().as_bytes())?;
            Ok(())
        })?;
        tracing::debug!("Wrote {} bytes to {}", self.settings.message().len(), manager.path().display());

        // Destructuring
        let (head, middle, tail) = match split_ends(&NUMBERS) {
            Some((head, middle, tail)) => (Some(*head), middle.to_vec(), Some(*tail)),
            None => (None, Vec::new(), None),
        };

        let product = product(&NUMBERS)?;
        tracing::debug!("Product of {:?}: {:?}", NUMBERS, product);

        if let Some(notice) = length_notice(&NUMBERS) {
            self.transcript.line(notice);
        }

        let word_count = WordCount::from_sentence(SENTENCE);
        tracing::debug!("Counted {} distinct words", word_count.len());

        self.transcript.line("Execution completed");
        if let Some(e) = self.transcript.take_error() {
            return Err(e.into());
        }
        tracing::info!("Language tour finished");

        Ok(TourReport {
            people,
            skills_by_name,
            fetch_results,
            all_skills,
            output_path: manager.path().to_path_buf(),
            product,
            head,
            middle,
            tail,
            word_count,
        })
    }
}
