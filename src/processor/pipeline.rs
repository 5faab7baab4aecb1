//! Stateless pipeline stages for one `execute()` call
//!
//! Stage order: line endings, start queue, mask, entity decode, default
//! queue, entity encode, unmask, end queue. Masking state lives only in the
//! `MaskingContext` returned by `mask`, so the pipeline needs `&` access to
//! everything it reads.

use regex::Regex;
use std::any::Any;
use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::LazyLock;
use tracing::{trace, warn};

use crate::config::OutputMode;
use crate::entities::{decode_entities, encode_entities};
use crate::errors::TypografError;
use crate::registry::{ConfigurationStore, Queue, Rule, RuleContext, RuleRegistry, RuleSettings};
use crate::safe_tags::{SafeRegionMasker, SafeTag};

static MARKUP_HINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<[a-z!]").expect("MARKUP_HINT regex is valid"));

/// CRLF and lone CR become LF
#[must_use]
pub fn normalize_line_endings(text: &str) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}

/// `<` followed by a letter or `!`, case-insensitively
#[must_use]
pub fn contains_markup(text: &str) -> bool {
    MARKUP_HINT.is_match(text)
}

/// Everything one call reads, borrowed from the processor instance
pub(crate) struct Pipeline<'a> {
    pub(crate) registry: &'a RuleRegistry,
    pub(crate) enabled: &'a HashMap<String, bool>,
    pub(crate) settings: &'a HashMap<String, RuleSettings>,
    pub(crate) overlay: &'a ConfigurationStore,
    pub(crate) safe_tags: &'a [SafeTag],
}

impl Pipeline<'_> {
    pub(crate) fn run(&self, text: &str, language: &str, mode: OutputMode) -> String {
        if text.is_empty() {
            return String::new();
        }

        let context = RuleContext::new(language, self.registry.data(), self.settings)
            .with_overlay(self.overlay);

        let mut text = normalize_line_endings(text);
        text = self.run_queue(text, Queue::Start, &context);

        let masker = SafeRegionMasker::new(self.safe_tags);
        let masked = if contains_markup(&text) {
            let (masked_text, ctx) = masker.mask(&text);
            text = masked_text;
            Some(ctx)
        } else {
            None
        };

        text = decode_entities(&text);
        text = self.run_queue(text, Queue::Default, &context);
        text = encode_entities(&text, mode);

        if let Some(ctx) = masked {
            text = masker.unmask(&text, &ctx);
        }

        self.run_queue(text, Queue::End, &context)
    }

    /// Inner rules first, then main rules, each in priority order
    fn run_queue(&self, mut text: String, queue: Queue, context: &RuleContext<'_>) -> String {
        let language = context.language();
        let inner = self.registry.inner_rules_for(language, queue);
        let main = self.registry.rules_for(language, queue);

        for rule in inner.chain(main) {
            if self.is_enabled(rule) {
                text = self.apply_rule(rule, text, context);
            }
        }
        text
    }

    fn is_enabled(&self, rule: &Rule) -> bool {
        self.enabled
            .get(rule.name())
            .copied()
            .unwrap_or(rule.enabled_by_default())
    }

    /// Run one handler; on error or panic keep the input and log
    fn apply_rule(&self, rule: &Rule, text: String, context: &RuleContext<'_>) -> String {
        let empty = RuleSettings::new();
        let settings = self.settings.get(rule.name()).unwrap_or(&empty);

        let outcome = catch_unwind(AssertUnwindSafe(|| rule.apply(&text, settings, context)));
        let reason = match outcome {
            Ok(Ok(result)) => {
                if result != text {
                    trace!(rule = rule.name(), "rule applied");
                }
                return result;
            }
            Ok(Err(e)) => format!("{e:#}"),
            Err(payload) => panic_message(payload.as_ref()),
        };

        let failure = TypografError::RuleHandlerFailure {
            rule: rule.name().to_string(),
            reason,
        };
        warn!(error = %failure, "rule failed, keeping its input");
        text
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {s}")
    } else {
        "panicked".to_string()
    }
}
