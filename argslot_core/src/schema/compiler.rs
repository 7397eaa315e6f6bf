use crate::constant::*;
use crate::model::{ParameterSlot, RequiredFlagSlot};
use crate::schema::{Schema, UsageError};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Outside,
    Required,
    Optional,
}

/// Bounds checked cursor over the usage string, yielding `(byte offset, char)`.
struct Cursor {
    characters: Vec<(usize, char)>,
    position: usize,
}

impl Cursor {
    fn new(usage: &str) -> Self {
        Self {
            characters: usage.char_indices().collect(),
            position: 0,
        }
    }

    fn advance(&mut self) -> Option<(usize, char)> {
        let current = self.characters.get(self.position).copied();

        if current.is_some() {
            self.position += 1;
        }

        current
    }

    /// Look `ahead` characters past the one most recently returned by `advance`.
    fn peek(&self, ahead: usize) -> Option<char> {
        self.characters
            .get(self.position + ahead)
            .map(|(_, character)| *character)
    }

    fn skip(&mut self, amount: usize) {
        self.position = std::cmp::min(self.position + amount, self.characters.len());
    }
}

struct Compiler {
    cursor: Cursor,
    mode: Mode,
    span_offset: usize,
    name: String,
    reached_first: bool,
    in_token: bool,
    tokens_before: usize,
    amount_required: usize,
    slots: Vec<ParameterSlot>,
    required_flags: Vec<RequiredFlagSlot>,
}

pub(super) fn compile(usage: &str) -> Result<Schema, UsageError> {
    let mut compiler = Compiler {
        cursor: Cursor::new(usage),
        mode: Mode::Outside,
        span_offset: 0,
        name: String::default(),
        reached_first: false,
        in_token: false,
        tokens_before: 0,
        amount_required: 0,
        slots: Vec::default(),
        required_flags: Vec::default(),
    };

    while let Some((offset, character)) = compiler.cursor.advance() {
        match compiler.mode {
            Mode::Outside => compiler.outside(offset, character),
            Mode::Required => compiler.inside(character, REQUIRED_CLOSE)?,
            Mode::Optional => compiler.inside(character, OPTIONAL_CLOSE)?,
        }
    }

    compiler.finish()
}

impl Compiler {
    fn outside(&mut self, offset: usize, character: char) {
        match character {
            REQUIRED_OPEN | OPTIONAL_OPEN => {
                self.reached_first = true;
                self.mode = if character == REQUIRED_OPEN {
                    Mode::Required
                } else {
                    Mode::Optional
                };
                self.span_offset = offset;
                self.name.clear();
            }
            ARGUMENT_SEPARATOR if !self.reached_first => {
                self.in_token = false;
            }
            _ if !self.reached_first => {
                if !self.in_token {
                    self.tokens_before += 1;
                    self.in_token = true;
                }
            }
            // Text between parameters carries no meaning.
            _ => {}
        }
    }

    fn inside(&mut self, character: char, expected: char) -> Result<(), UsageError> {
        if character == FLAG_PREFIX {
            if let Some(flag) = self.flag_denotation() {
                // Move past the denotation and the separator after it.
                self.cursor.skip(2);
                return self.flag(flag);
            }
        }

        match character {
            _ if character == expected => {
                if self.name.is_empty() {
                    return Err(UsageError::EmptyParameter {
                        offset: self.span_offset,
                    });
                }

                let required = self.mode == Mode::Required;
                let name = std::mem::take(&mut self.name);

                if required {
                    self.amount_required += 1;
                }

                self.slots.push(ParameterSlot::new(name, required));
                self.mode = Mode::Outside;
            }
            // Anything else, other delimiters included, is part of the name.
            _ => self.name.push(character),
        }

        Ok(())
    }

    // A flag looks like `-X ` where `X` is any character other than whitespace or a delimiter.
    fn flag_denotation(&self) -> Option<char> {
        match (self.cursor.peek(0), self.cursor.peek(1)) {
            (Some(denotation), Some(ARGUMENT_SEPARATOR))
                if !denotation.is_whitespace()
                    && !matches!(
                        denotation,
                        REQUIRED_OPEN | REQUIRED_CLOSE | OPTIONAL_OPEN | OPTIONAL_CLOSE
                    ) =>
            {
                Some(denotation)
            }
            _ => None,
        }
    }

    fn flag(&mut self, flag: char) -> Result<(), UsageError> {
        let mut description = String::default();

        let required = loop {
            match self.cursor.advance() {
                Some((_, REQUIRED_CLOSE)) => break true,
                Some((_, OPTIONAL_CLOSE)) => break false,
                Some((_, character)) => description.push(character),
                None => {
                    return Err(UsageError::UnterminatedFlag {
                        flag,
                        offset: self.span_offset,
                    });
                }
            }
        };

        if required {
            self.required_flags
                .push(RequiredFlagSlot::new(flag, description));
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Flag '-{flag}' closes optionally; it will not be required.");
            }
        }

        // The flag stands in for the whole parameter.
        self.name.clear();
        self.mode = Mode::Outside;
        Ok(())
    }

    fn finish(self) -> Result<Schema, UsageError> {
        if self.mode != Mode::Outside {
            return Err(UsageError::UnterminatedParameter {
                name: self.name,
                offset: self.span_offset,
            });
        }

        // The leading token is the command itself.
        let args_before_params = self.tokens_before.saturating_sub(1);

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Compiled {} slots ({} required), {} required flags, {args_before_params} arguments before parameters.",
                self.slots.len(),
                self.amount_required,
                self.required_flags.len()
            );
        }

        Ok(Schema::new(
            self.slots,
            args_before_params,
            self.amount_required,
            self.required_flags,
        ))
    }
}
