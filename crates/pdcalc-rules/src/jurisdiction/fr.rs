//! # France: Code de la propriété intellectuelle
//!
//! Decision tree for the French protection terms, including the EEA
//! harmonised terms, the sui generis database right, neighbouring rights
//! (films, phonograms, performances, broadcasts), and the wartime
//! extensions for musical works.
//!
//! ## Structure
//!
//! [`France::status()`] parses the work type and dispatches to one branch
//! function per family. Every branch ends in a named leaf from [`rule`];
//! the leaf name is returned in the [`Determination`] so an outcome can be
//! traced back to the statutory rule that produced it. Each leaf is a
//! [`TermTest`] with strict `>`.
//!
//! ## Assumptions
//!
//! Facts the data model cannot carry (right ownership, "mort pour la
//! France" status, first communication to the public) are assumed and
//! recorded with the texts in [`assumption`]. Facts a leaf cannot do
//! without (a death date for life-based terms, a publication date for
//! broadcasts) fail with [`PdError::MissingRequiredFact`].

use chrono::{Datelike, NaiveDate};

use pdcalc_core::{years_between, AssumptionLog, AuthorKind, PdError, PdResult, Work, WorkType};

use crate::calculator::{Calculator, Determination};
use crate::config::{MissingDeathPolicy, RulesConfig};
use crate::term::{Clock, TermTest};

/// Assumption texts recorded by the French engine.
pub mod assumption {
    pub const RIGHT_HOLDER: &str = "Assuming that the author of the work is also the right holder.";
    pub const DB_PUBLISHED_ON_COMPLETION: &str =
        "Assuming that the DB was made available to the public after its completion or last substantial change.";
    pub const ORPHAN_WORK: &str = "The work is an orphan work.";
    pub const NOT_MORT_POUR_LA_FRANCE: &str =
        "Assuming that the author did not die for France during WWI or WWII.";
    pub const MUSIC_NOT_PD_1919: &str =
        "Assuming that the work was not in the public domain on Feb 3rd 1919.";
    pub const MUSIC_NOT_PD_1941: &str =
        "Assuming that the work was not in the public domain on August 13th 1941.";
    pub const NOT_ELIGIBLE: &str =
        "Work is not eligible for protection because it has not been created in a EEA or Treaty country.";
    pub const COMMUNICATED_ON_PUBLICATION: &str =
        "Assuming that the work has been communicated to the public when it was first published.";
}

/// Leaf names of the decision tree.
pub mod rule {
    pub const DATABASE_NO_EEA: &str = "fr.database.no_eea_connection";
    pub const DATABASE_CHANGED_15: &str = "fr.database.last_change_15";
    pub const DATABASE_PUBLISHED_15: &str = "fr.database.publication_15";
    pub const ORPHAN_WORK: &str = "fr.artistic.orphan_work";
    pub const ANONYMOUS_LATE_PUBLICATION_25: &str = "fr.artistic.anonymous.late_publication_25";
    pub const ANONYMOUS_PUBLISHED_70: &str = "fr.artistic.anonymous.publication_70";
    pub const ANONYMOUS_UNPUBLISHED_70: &str = "fr.artistic.anonymous.creation_70";
    pub const POSTHUMOUS_PUBLICATION_25: &str = "fr.artistic.posthumous_publication_25";
    pub const MUSIC_BEFORE_1921_85: &str = "fr.artistic.music.published_before_1921";
    pub const MUSIC_BEFORE_1948_79: &str = "fr.artistic.music.published_before_1948";
    pub const LIFE_PLUS_70: &str = "fr.artistic.life_plus_70";
    pub const UNPUBLISHED_LIFE_PLUS_70: &str = "fr.artistic.unpublished.life_plus_70";
    pub const TREATY_TERM: &str = "fr.artistic.treaty_term";
    pub const NOT_ELIGIBLE: &str = "fr.artistic.not_eligible";
    pub const FILM_PUBLICATION_50: &str = "fr.film.publication_50";
    pub const FILM_FIXATION_50: &str = "fr.film.fixation_50";
    pub const PERFORMANCE_PUBLICATION_50: &str = "fr.performance.publication_50";
    pub const PERFORMANCE_FIXATION_50: &str = "fr.performance.fixation_50";
    pub const RECORDING_PUBLICATION_50: &str = "fr.recording.publication_50";
    pub const RECORDING_FIXATION_50: &str = "fr.recording.fixation_50";
    pub const BROADCAST_50: &str = "fr.broadcast.publication_50";
}

const DATABASE_TERM: f64 = 15.0;
const AUTHOR_TERM: f64 = 70.0;
const POSTHUMOUS_TERM: f64 = 25.0;
const NEIGHBOURING_TERM: f64 = 50.0;

/// Musical works published before this year carry both wartime
/// extensions (law of 3 February 1919 and law of 21 September 1951).
const MUSIC_FIRST_CUTOVER_YEAR: i32 = 1921;
const MUSIC_FIRST_CUTOVER_TERM: f64 = 85.0;
/// Musical works published before this year carry the Second World War
/// extension only.
const MUSIC_SECOND_CUTOVER_YEAR: i32 = 1948;
const MUSIC_SECOND_CUTOVER_TERM: f64 = 79.0;

type Verdict = (bool, &'static str);

/// The French rule engine.
#[derive(Debug, Clone, Default)]
pub struct France {
    config: RulesConfig,
}

impl France {
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }
}

impl Calculator for France {
    fn code(&self) -> &'static str {
        "fr"
    }

    fn status(&self, work: &Work, as_of: NaiveDate) -> PdResult<Determination> {
        tracing::debug!(title = %work.title, work_type = %work.work_type, %as_of, "evaluating under fr");
        work.validate()?;
        let mut eval = Evaluation {
            work,
            as_of,
            config: &self.config,
            log: AssumptionLog::new(),
        };
        let (public_domain, rule) = eval.run()?;
        Ok(Determination {
            public_domain,
            rule,
            assumptions: eval.log,
        })
    }
}

/// State of a single evaluation. Dropped when the call returns.
struct Evaluation<'a> {
    work: &'a Work,
    as_of: NaiveDate,
    config: &'a RulesConfig,
    log: AssumptionLog,
}

impl Evaluation<'_> {
    fn run(&mut self) -> PdResult<Verdict> {
        let kind = self.work.kind()?;
        match kind {
            WorkType::Database => self.database(),
            WorkType::Literary
            | WorkType::Artistic
            | WorkType::Dramatic
            | WorkType::Photograph
            | WorkType::Composition
            | WorkType::Collective => self.artistic(kind),
            WorkType::Film => {
                self.fixation_based(rule::FILM_PUBLICATION_50, rule::FILM_FIXATION_50)
            }
            WorkType::Performance => self.fixation_based(
                rule::PERFORMANCE_PUBLICATION_50,
                rule::PERFORMANCE_FIXATION_50,
            ),
            WorkType::Recording => {
                self.log.record(assumption::COMMUNICATED_ON_PUBLICATION);
                self.fixation_based(
                    rule::RECORDING_PUBLICATION_50,
                    rule::RECORDING_FIXATION_50,
                )
            }
            WorkType::Broadcast => self.decide(
                rule::BROADCAST_50,
                TermTest::new(Clock::Publication, NEIGHBOURING_TERM),
            ),
        }
    }

    fn decide(&self, rule: &'static str, test: TermTest) -> PdResult<Verdict> {
        let expired = test.expired(self.work, self.as_of).map_err(|e| match e {
            PdError::MissingRequiredFact { fact, .. } => PdError::missing(fact, rule),
            other => other,
        })?;
        tracing::debug!(rule, expired, "rule applied");
        Ok((expired, rule))
    }

    // ---- sui generis database right ----

    fn database(&mut self) -> PdResult<Verdict> {
        self.log.record(assumption::RIGHT_HOLDER);

        // Individuals and organisations are treated alike here.
        if !self.work.has_eea_connection() {
            return Ok((false, rule::DATABASE_NO_EEA));
        }

        if self.work.changed {
            return self.decide(
                rule::DATABASE_CHANGED_15,
                TermTest::new(Clock::LastChange, DATABASE_TERM),
            );
        }

        self.log.record(assumption::DB_PUBLISHED_ON_COMPLETION);
        let clock = if self.work.is_published() {
            Clock::Publication
        } else {
            Clock::Creation
        };
        self.decide(
            rule::DATABASE_PUBLISHED_15,
            TermTest::new(clock, DATABASE_TERM),
        )
    }

    // ---- literary and artistic works ----

    fn artistic(&mut self, kind: WorkType) -> PdResult<Verdict> {
        if self.work.authors.is_empty() {
            self.log.record(assumption::ORPHAN_WORK);
            return Ok((false, rule::ORPHAN_WORK));
        }

        if self.work.has_eea_connection() {
            if self.work.has_anonymous_author() || kind == WorkType::Collective {
                return self.anonymous_or_collective();
            }
            return self.natural_persons(kind);
        }

        // A zero treaty term means no treaty applies.
        if let Some(term) = self.work.treaty_term().filter(|t| *t > 0) {
            let death = self.last_death(rule::TREATY_TERM)?;
            return self.decide(
                rule::TREATY_TERM,
                TermTest::new(Clock::Death(death), f64::from(term)),
            );
        }

        self.log.record(assumption::NOT_ELIGIBLE);
        Ok((true, rule::NOT_ELIGIBLE))
    }

    fn anonymous_or_collective(&mut self) -> PdResult<Verdict> {
        if !self.work.is_published() {
            return self.decide(
                rule::ANONYMOUS_UNPUBLISHED_70,
                TermTest::new(Clock::Creation, AUTHOR_TERM),
            );
        }
        if self.work.creation_years(self.as_of) > AUTHOR_TERM {
            self.decide(
                rule::ANONYMOUS_LATE_PUBLICATION_25,
                TermTest::new(Clock::Publication, POSTHUMOUS_TERM),
            )
        } else {
            self.decide(
                rule::ANONYMOUS_PUBLISHED_70,
                TermTest::new(Clock::Publication, AUTHOR_TERM),
            )
        }
    }

    fn natural_persons(&mut self, kind: WorkType) -> PdResult<Verdict> {
        let Some(published) = self.work.publication_date else {
            let death = self.last_death(rule::UNPUBLISHED_LIFE_PLUS_70)?;
            return self.decide(
                rule::UNPUBLISHED_LIFE_PLUS_70,
                TermTest::new(Clock::Death(death), AUTHOR_TERM),
            );
        };
        let death = self.last_death(rule::LIFE_PLUS_70)?;

        if years_between(death, published) > AUTHOR_TERM {
            return self.decide(
                rule::POSTHUMOUS_PUBLICATION_25,
                TermTest::new(Clock::Publication, POSTHUMOUS_TERM),
            );
        }

        // Not derivable from the data model.
        self.log.record(assumption::NOT_MORT_POUR_LA_FRANCE);

        if kind == WorkType::Composition {
            if published.year() < MUSIC_FIRST_CUTOVER_YEAR {
                self.log.record(assumption::MUSIC_NOT_PD_1919);
                return self.decide(
                    rule::MUSIC_BEFORE_1921_85,
                    TermTest::new(Clock::Death(death), MUSIC_FIRST_CUTOVER_TERM),
                );
            }
            if published.year() < MUSIC_SECOND_CUTOVER_YEAR {
                self.log.record(assumption::MUSIC_NOT_PD_1941);
                return self.decide(
                    rule::MUSIC_BEFORE_1948_79,
                    TermTest::new(Clock::Death(death), MUSIC_SECOND_CUTOVER_TERM),
                );
            }
        }

        self.decide(
            rule::LIFE_PLUS_70,
            TermTest::new(Clock::Death(death), AUTHOR_TERM),
        )
    }

    /// Death of the last surviving author, per the configured policy.
    fn last_death(&self, rule: &'static str) -> PdResult<NaiveDate> {
        if self.config.missing_death_policy == MissingDeathPolicy::Strict {
            if let Some(author) = self
                .work
                .authors
                .iter()
                .find(|a| a.kind == AuthorKind::Person && a.death_date.is_none())
            {
                return Err(PdError::missing(
                    "death_date",
                    format!("{rule}: author {:?} has no recorded death date", author.name),
                ));
            }
        }
        self.work.last_surviving_death().ok_or_else(|| {
            PdError::missing(
                "death_date",
                format!("{rule}: no author has a recorded death date"),
            )
        })
    }

    // ---- neighbouring rights ----

    /// Films, performances and phonograms: 50 years from publication when
    /// publication came within 50 years of fixation, otherwise 50 years
    /// from fixation.
    fn fixation_based(
        &mut self,
        publication_rule: &'static str,
        fixation_rule: &'static str,
    ) -> PdResult<Verdict> {
        match self.work.publication_date {
            Some(published)
                if years_between(self.work.creation_date, published) < NEIGHBOURING_TERM =>
            {
                self.decide(
                    publication_rule,
                    TermTest::new(Clock::Publication, NEIGHBOURING_TERM),
                )
            }
            _ => self.decide(
                fixation_rule,
                TermTest::new(Clock::Creation, NEIGHBOURING_TERM),
            ),
        }
    }
}
