// ============================================================
// Layer 5 — Timed Presentation Loop
// ============================================================
// Runs the self-paced reading session. Per word, the cycle is a
// small state machine:
//
//   Idle → Displaying     screen cleared, word rendered centered,
//                         start timestamp taken once the word is
//                         visible
//   Displaying → AwaitingInput
//                         the loop blocks on one acknowledgment;
//                         its content is ignored
//   AwaitingInput → Recorded
//                         end timestamp taken on receipt; reading
//                         time = end - start, in seconds
//   Recorded → Idle       one record appended, screen cleared for
//                         the next word
//
// Before the first word there is a ready gate: a prompt and one
// acknowledgment that is neither timed nor logged, so the first
// real measurement starts from a clean, expected screen.
//
// The loop is generic over the Screen / AckInput / RecordSink
// seams, so the same code runs against a real terminal and
// against scripted test doubles.
//
// Reference: Jegerski & VanPatten (2014), self-paced reading
//            methodology

use anyhow::Result;
use std::time::Instant;

use crate::domain::record::WordRecord;
use crate::domain::stimulus::Stimulus;
use crate::domain::traits::{AckInput, RecordSink, Screen};

/// Prompt shown at the ready gate, before any timing starts
const READY_PROMPT: &str = "Press ENTER to start the experiment!";

/// Present the stimuli in the given (already randomized) display
/// order and append one record per word to the sink.
///
/// The sink receives records strictly in display order; the sink
/// implementation is responsible for making each row durable as
/// soon as it is appended. Word indices restart at 1 for every
/// stimulus — they number the word within its own sentence, not
/// within the session.
pub fn run_session<S, A, R>(
    stimuli: &[Stimulus],
    screen:  &mut S,
    input:   &mut A,
    sink:    &mut R,
) -> Result<()>
where
    S: Screen,
    A: AckInput,
    R: RecordSink,
{
    // ── Ready gate — untimed, unlogged ────────────────────────────────────────
    screen.clear()?;
    screen.show_prompt(READY_PROMPT)?;
    input.wait_for_ack()?;
    screen.clear()?;

    let mut recorded = 0usize;

    for stimulus in stimuli {
        // An empty stimulus has no words: the inner loop simply
        // doesn't run and no rows are produced for it
        for (i, word) in stimulus.words.iter().enumerate() {
            let word_index = i + 1;

            // Idle → Displaying: the clock starts once the word
            // is visible, so render cost is not reading time
            screen.show_centered(&word.text)?;
            let shown_at = Instant::now();

            // Displaying → AwaitingInput → Recorded
            input.wait_for_ack()?;
            let reading_time_s = shown_at.elapsed().as_secs_f64();

            sink.append(&WordRecord {
                condition:           stimulus.condition.clone(),
                is_word_of_interest: word.is_word_of_interest,
                global_index:        stimulus.global_index,
                sentence_index:      stimulus.sentence_index,
                word_index,
                word:                word.text.clone(),
                reading_time_s,
            })?;
            recorded += 1;

            // Recorded → Idle
            screen.clear()?;
        }
    }

    tracing::debug!(
        "Session complete: {} stimuli, {} words recorded",
        stimuli.len(),
        recorded
    );
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{indexer::assign_indices, tokenizer::tokenize_all};
    use crate::domain::stimulus::RawStimulus;
    use crate::infra::record_log::RecordLog;

    // Test doubles for the three seams ------------------------------------

    /// Screen that records everything it was asked to show
    #[derive(Default)]
    struct RecordingScreen {
        shown:  Vec<String>,
        clears: usize,
    }

    impl Screen for RecordingScreen {
        fn clear(&mut self) -> Result<()> {
            self.clears += 1;
            Ok(())
        }
        fn show_centered(&mut self, text: &str) -> Result<()> {
            self.shown.push(text.to_string());
            Ok(())
        }
        fn show_prompt(&mut self, _text: &str) -> Result<()> {
            Ok(())
        }
    }

    /// Participant who acknowledges instantly, counting presses
    #[derive(Default)]
    struct ScriptedAck {
        presses: usize,
    }

    impl AckInput for ScriptedAck {
        fn wait_for_ack(&mut self) -> Result<()> {
            self.presses += 1;
            Ok(())
        }
    }

    /// Sink that keeps records in memory
    #[derive(Default)]
    struct MemorySink {
        records: Vec<WordRecord>,
    }

    impl RecordSink for MemorySink {
        fn append(&mut self, record: &WordRecord) -> Result<()> {
            self.records.push(record.clone());
            Ok(())
        }
    }

    /// Run the full preparation pipeline on (condition, text)
    /// pairs, in input order
    fn prepare(rows: &[(&str, &str)]) -> Vec<Stimulus> {
        let raw = rows
            .iter()
            .map(|(c, t)| RawStimulus::new(*c, *t))
            .collect();
        tokenize_all(assign_indices(raw))
    }

    #[test]
    fn test_one_record_per_word_in_display_order() {
        let stimuli = prepare(&[("a", "The *cat sat"), ("b", "Dogs bark")]);
        let (mut screen, mut input, mut sink) =
            (RecordingScreen::default(), ScriptedAck::default(), MemorySink::default());

        run_session(&stimuli, &mut screen, &mut input, &mut sink).unwrap();

        let words: Vec<&str> = sink.records.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["The", "cat", "sat", "Dogs", "bark"]);
        assert_eq!(screen.shown, vec!["The", "cat", "sat", "Dogs", "bark"]);
    }

    #[test]
    fn test_ready_gate_is_untimed_and_unlogged() {
        let stimuli = prepare(&[("a", "one two")]);
        let (mut screen, mut input, mut sink) =
            (RecordingScreen::default(), ScriptedAck::default(), MemorySink::default());

        run_session(&stimuli, &mut screen, &mut input, &mut sink).unwrap();

        // One press for the gate + one per word, but only the
        // word presses produce records
        assert_eq!(input.presses, 3);
        assert_eq!(sink.records.len(), 2);
    }

    #[test]
    fn test_word_index_resets_per_stimulus() {
        let stimuli = prepare(&[("a", "one two three"), ("a", "four five")]);
        let (mut screen, mut input, mut sink) =
            (RecordingScreen::default(), ScriptedAck::default(), MemorySink::default());

        run_session(&stimuli, &mut screen, &mut input, &mut sink).unwrap();

        let indices: Vec<usize> = sink.records.iter().map(|r| r.word_index).collect();
        assert_eq!(indices, vec![1, 2, 3, 1, 2]);
        // Source indices carried through unchanged
        assert_eq!(sink.records[3].global_index, 2);
        assert_eq!(sink.records[3].sentence_index, 2);
    }

    #[test]
    fn test_reading_times_are_non_negative() {
        let stimuli = prepare(&[("a", "quick check")]);
        let (mut screen, mut input, mut sink) =
            (RecordingScreen::default(), ScriptedAck::default(), MemorySink::default());

        run_session(&stimuli, &mut screen, &mut input, &mut sink).unwrap();

        assert!(sink.records.iter().all(|r| r.reading_time_s >= 0.0));
    }

    #[test]
    fn test_empty_stimulus_produces_no_rows() {
        // A zero-word stimulus is legal; it just contributes
        // nothing to the session
        let stimuli = prepare(&[("a", ""), ("b", "word")]);
        let (mut screen, mut input, mut sink) =
            (RecordingScreen::default(), ScriptedAck::default(), MemorySink::default());

        run_session(&stimuli, &mut screen, &mut input, &mut sink).unwrap();

        assert_eq!(sink.records.len(), 1);
        assert_eq!(sink.records[0].word, "word");
        assert_eq!(sink.records[0].global_index, 2);
    }

    #[test]
    fn test_round_trip_through_csv_log() {
        // Full path: prepare → present → real CSV sink on disk
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");

        let stimuli = prepare(&[("A", "hi *you")]);
        let (mut screen, mut input) = (RecordingScreen::default(), ScriptedAck::default());
        let mut sink = RecordLog::create(&path).unwrap();

        run_session(&stimuli, &mut screen, &mut input, &mut sink).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3); // header + 2 words
        assert_eq!(
            lines[0],
            "Condition,IsWordOfInterest,Global Index,Sentence Index,Word Index,Word,RT(s)"
        );
        assert!(lines[1].starts_with("A,false,1,1,1,hi,"));
        assert!(lines[2].starts_with("A,true,1,1,2,you,"));
    }
}
