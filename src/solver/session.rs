//! Per-game solving session
//!
//! Owns one game's knowledge next to the learner's weights and statistics.
//! Independent sessions share nothing but the read-only corpus.

use super::filter::{Exclusion, filter_candidates};
use super::knowledge::KnowledgeState;
use super::scoring::{ScoredCandidate, rank, score_all};
use super::selector::{GuessSelector, Selection};
use super::tracker::{LearnerState, LearningStats, PerformanceWeights, Reinforcement};
use crate::config::EngineConfig;
use crate::core::{Feedback, Game, GameError, Word};
use crate::corpus::Corpus;
use rand::Rng;
use tracing::info;

/// A bot guess together with the feedback it received
#[derive(Debug, Clone, PartialEq)]
pub struct BotTurn {
    pub selection: Selection,
    pub feedback: Feedback,
    /// Candidates consistent with the knowledge before this guess
    pub candidates_before: usize,
    /// Candidates left once the feedback was folded in
    pub candidates_after: usize,
}

/// Deduction engine for one player
///
/// # Examples
/// ```
/// use wordle_bot::config::EngineConfig;
/// use wordle_bot::core::{Feedback, Word};
/// use wordle_bot::corpus::Corpus;
/// use wordle_bot::solver::Session;
///
/// let corpus = Corpus::embedded();
/// let mut session = Session::new(&corpus, EngineConfig::default());
///
/// let guess = Word::new("apple").unwrap();
/// let target = Word::new("angle").unwrap();
/// session.update_knowledge(&guess, &Feedback::evaluate(&guess, &target));
///
/// assert!(session
///     .available_candidates()
///     .iter()
///     .any(|w| w.text() == "angle"));
/// ```
#[derive(Debug, Clone)]
pub struct Session<'a> {
    corpus: &'a Corpus,
    config: EngineConfig,
    selector: GuessSelector,
    reinforcement: Reinforcement,
    exclusion: Exclusion,
    knowledge: KnowledgeState,
    weights: PerformanceWeights,
    stats: LearningStats,
}

impl<'a> Session<'a> {
    /// Fresh learner: every corpus word weighted 1.0, no history
    #[must_use]
    pub fn new(corpus: &'a Corpus, config: EngineConfig) -> Self {
        let learner = LearnerState {
            weights: PerformanceWeights::for_words(corpus.words()),
            stats: LearningStats::with_limit(config.history_limit),
        };
        Self::with_learner(corpus, config, learner)
    }

    /// Resume from previously saved weights and statistics
    #[must_use]
    pub fn with_learner(corpus: &'a Corpus, config: EngineConfig, learner: LearnerState) -> Self {
        let LearnerState {
            mut weights,
            mut stats,
        } = learner;
        weights.fill_missing(corpus.words());
        stats.set_history_limit(config.history_limit);

        Self {
            corpus,
            selector: GuessSelector::new(&config.opening_words, config.top_k),
            reinforcement: Reinforcement::from_config(&config),
            exclusion: Exclusion::from_cumulative(config.cumulative_exclusion),
            config,
            knowledge: KnowledgeState::new(),
            weights,
            stats,
        }
    }

    /// Clear per-game knowledge; weights and statistics are kept
    pub fn reset_knowledge(&mut self) {
        self.knowledge.reset();
    }

    /// Fold a revealed guess and its feedback into the knowledge
    pub fn update_knowledge(&mut self, guess: &Word, feedback: &Feedback) {
        self.knowledge.update(guess, feedback);
    }

    /// Corpus words still consistent with everything observed, in corpus order
    #[must_use]
    pub fn available_candidates(&self) -> Vec<&'a Word> {
        filter_candidates(&self.knowledge, self.corpus.words(), self.exclusion)
    }

    /// Choose the guess for `turn` (0-based)
    ///
    /// Returns `None` only for an empty corpus with no opening book.
    pub fn next_guess<R: Rng + ?Sized>(&self, turn: usize, rng: &mut R) -> Option<Selection> {
        self.selector.choose(
            turn,
            &self.knowledge,
            self.corpus,
            &self.weights,
            self.exclusion,
            rng,
        )
    }

    /// Adjust the weights of every word guessed in a finished game
    pub fn reinforce(&mut self, guessed: &[Word], won: bool) {
        self.reinforcement.apply(&mut self.weights, guessed, won);
    }

    /// Reinforce and add the game to the statistics
    pub fn record_game(&mut self, guessed: &[Word], won: bool) {
        self.reinforce(guessed, won);
        self.stats.record(guessed.len(), won);
        info!(
            games = self.stats.games_played,
            win_rate = self.stats.win_rate(),
            "game recorded"
        );
    }

    /// The `top_n` best candidates with their scores, best first
    #[must_use]
    pub fn candidate_scores(&self, top_n: usize) -> Vec<ScoredCandidate<'a>> {
        let candidates = self.available_candidates();
        let mut scored = score_all(
            &candidates,
            &self.knowledge,
            &self.weights,
            self.corpus.letter_frequency(),
        );
        rank(&mut scored);
        scored.truncate(top_n);
        scored
    }

    /// Pick a guess for the game's next turn, submit it and learn from the
    /// feedback
    ///
    /// The turn index is the number of guesses already in `game`, so feedback
    /// the caller folded in from other players does not advance it.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the game has already finished.
    pub fn play_turn<R: Rng + ?Sized>(
        &mut self,
        game: &mut Game,
        rng: &mut R,
    ) -> Result<Option<BotTurn>, GameError> {
        if game.is_over() {
            return Err(GameError::GameOver);
        }
        let Some(selection) = self.next_guess(game.attempts_used(), rng) else {
            return Ok(None);
        };
        let candidates_before = self.available_candidates().len();

        let feedback = game.submit(selection.word.clone())?;
        self.update_knowledge(&selection.word, &feedback);
        Ok(Some(BotTurn {
            selection,
            feedback,
            candidates_before,
            candidates_after: self.available_candidates().len(),
        }))
    }

    /// Play a whole game against `target` and record the result
    ///
    /// # Errors
    /// Propagates `GameError` from submitting guesses.
    pub fn play_game<R: Rng + ?Sized>(
        &mut self,
        target: Word,
        max_attempts: usize,
        rng: &mut R,
    ) -> Result<(Game, Vec<BotTurn>), GameError> {
        self.reset_knowledge();
        let mut game = Game::new(target, max_attempts);
        let mut turns = Vec::with_capacity(max_attempts);

        while !game.is_over() {
            match self.play_turn(&mut game, rng)? {
                Some(turn) => turns.push(turn),
                None => break,
            }
        }

        self.record_game(&game.guesses(), game.is_won());
        Ok((game, turns))
    }

    #[must_use]
    pub const fn knowledge(&self) -> &KnowledgeState {
        &self.knowledge
    }

    #[must_use]
    pub const fn weights(&self) -> &PerformanceWeights {
        &self.weights
    }

    #[must_use]
    pub const fn stats(&self) -> &LearningStats {
        &self.stats
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    /// Snapshot of the weights and statistics for persistence
    #[must_use]
    pub fn learner(&self) -> LearnerState {
        LearnerState {
            weights: self.weights.clone(),
            stats: self.stats.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;
    use crate::corpus::loader::words_from_slice;
    use crate::solver::SelectionKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn small_corpus() -> Corpus {
        Corpus::new(words_from_slice(&["apple", "angle", "ankle"]))
    }

    #[test]
    fn apple_angle_ankle_end_to_end() {
        let corpus = small_corpus();
        let mut session = Session::new(&corpus, EngineConfig::default());

        let guess = word("apple");
        let feedback = Feedback::evaluate(&guess, &word("angle"));
        assert_eq!(feedback.to_string(), "G--GG");
        session.update_knowledge(&guess, &feedback);

        let texts: Vec<&str> = session.available_candidates().iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["angle", "ankle"]);

        let scores = session.candidate_scores(10);
        assert_eq!(scores.len(), 2);
        // both words differ only in G/K; neither letter is classified yet
        assert!((scores[0].score - scores[1].score).abs() < 10.0);

        let mut rng = StdRng::seed_from_u64(11);
        let pick = session.next_guess(1, &mut rng).unwrap();
        assert_eq!(pick.kind, SelectionKind::Weighted);
        assert!(["angle", "ankle"].contains(&pick.word.text()));
    }

    #[test]
    fn reset_keeps_learning() {
        let corpus = small_corpus();
        let mut session = Session::new(&corpus, EngineConfig::default());
        session.update_knowledge(&word("apple"), &Feedback::evaluate(&word("apple"), &word("angle")));
        session.record_game(&[word("apple"), word("angle")], true);

        session.reset_knowledge();
        assert!(session.knowledge().is_empty());
        assert_eq!(session.available_candidates().len(), 3);
        assert_eq!(session.stats().games_played, 1);
        assert!((session.weights().get("angle") - 1.05).abs() < 1e-12);
    }

    #[test]
    fn reinforcement_direction() {
        let corpus = small_corpus();
        let mut session = Session::new(&corpus, EngineConfig::default());

        session.reinforce(&[word("apple")], true);
        session.reinforce(&[word("ankle")], false);

        assert!(session.weights().get("apple") > 1.0);
        assert!(session.weights().get("ankle") < 1.0);
        assert!((session.weights().get("angle") - 1.0).abs() < f64::EPSILON);
        // reinforce alone leaves the statistics untouched
        assert_eq!(session.stats().games_played, 0);
    }

    #[test]
    fn candidate_scores_are_ranked_and_truncated() {
        let corpus = Corpus::embedded();
        let session = Session::new(&corpus, EngineConfig::default());

        let top = session.candidate_scores(10);
        assert_eq!(top.len(), 10);
        assert!(top.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn plays_embedded_games_to_completion() {
        let corpus = Corpus::embedded();
        let mut session = Session::new(&corpus, EngineConfig::default());
        let mut rng = StdRng::seed_from_u64(42);

        for target in ["angle", "speed", "about", "youth", "world"] {
            let (game, turns) = session.play_game(word(target), 6, &mut rng).unwrap();
            assert!(game.is_over());
            assert_eq!(turns.len(), game.attempts_used());
            assert_eq!(turns[0].selection.kind, SelectionKind::Opening);
            assert_eq!(turns[0].candidates_before, corpus.len());
            for pair in turns.windows(2) {
                assert_eq!(pair[1].candidates_before, pair[0].candidates_after);
            }
            if game.is_won() {
                assert_eq!(game.turns().last().unwrap().guess.text(), target);
            }
        }
        assert_eq!(session.stats().games_played, 5);
    }

    #[test]
    fn corpus_target_is_always_found_with_many_attempts() {
        let corpus = Corpus::embedded();
        let mut session = Session::new(&corpus, EngineConfig::default());
        let mut rng = StdRng::seed_from_u64(7);

        // Candidates only shrink towards the target, so a generous limit wins
        for target in ["theft", "fifty", "elite", "apple"] {
            let (game, _) = session.play_game(word(target), 50, &mut rng).unwrap();
            assert_eq!(game.outcome(), Outcome::Won, "missed {target}");
        }
    }

    #[test]
    fn play_turn_uses_own_turn_index() {
        let corpus = Corpus::embedded();
        let mut session = Session::new(&corpus, EngineConfig::default());
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = Game::new(word("angle"), 10);

        // Feedback from another player does not move the bot past its opening
        let other = word("world");
        session.update_knowledge(&other, &Feedback::evaluate(&other, &word("angle")));

        let turn = session.play_turn(&mut game, &mut rng).unwrap().unwrap();
        assert_eq!(turn.selection.kind, SelectionKind::Opening);
        assert_eq!(game.attempts_used(), 1);
        assert!(turn.candidates_before < corpus.len());
    }

    #[test]
    fn finished_game_rejects_turns() {
        let corpus = small_corpus();
        let mut session = Session::new(&corpus, EngineConfig::default());
        let mut game = Game::new(word("angle"), 1);
        game.submit(word("angle")).unwrap();

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            session.play_turn(&mut game, &mut rng),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn learner_round_trips_through_session() {
        let corpus = small_corpus();
        let mut session = Session::new(&corpus, EngineConfig::default());
        session.record_game(&[word("ankle")], false);

        let restored = Session::with_learner(&corpus, EngineConfig::default(), session.learner());
        assert_eq!(restored.weights(), session.weights());
        assert_eq!(restored.stats().games_played, 1);
    }

    #[test]
    fn loaded_history_is_trimmed_to_config_limit() {
        let corpus = small_corpus();
        let mut saved = LearnerState::default();
        for _ in 0..30 {
            saved.stats.record(3, true);
        }

        let config = EngineConfig {
            history_limit: 5,
            ..EngineConfig::default()
        };
        let session = Session::with_learner(&corpus, config, saved);
        assert_eq!(session.stats().history.len(), 5);
        assert_eq!(session.stats().history.front().map(|r| r.game), Some(26));
        assert_eq!(session.stats().games_played, 30);
    }
}
