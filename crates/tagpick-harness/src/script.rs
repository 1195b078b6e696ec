#![forbid(unsafe_code)]

//! Line-oriented interaction scripts.
//!
//! One command per line. Blank lines and lines starting with `#` are
//! skipped. A command may be prefixed with `@N ` to target picker `N`
//! (0-based, default 0).
//!
//! | Command | Event |
//! |---------|-------|
//! | `open` | click the select box |
//! | `toggle <value>` | click an option |
//! | `enter <value>` | focus an option, press Enter |
//! | `all` | click "all tags" |
//! | `remove <value>` | click a chip's remove glyph |
//! | `search <term>` | type into the search field (term may be empty) |
//! | `clear` | click the clear control |
//! | `outside` | click the page outside every picker |
//! | `submit` | submit the form |
//! | `render` | print markup (all pickers unless prefixed) |

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use tagpick_core::event::{Event, Target};
use tagpick_widgets::{
    Registry, SubmitGate, Submission, TagRecord, TagSelect, TagSelectConfig, WidgetId,
    render_to_string,
};

use crate::config::HarnessConfig;
use crate::error::HarnessError;

/// One script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Click the select box.
    Open,
    /// Click the option with this value.
    Toggle(String),
    /// Focus the option with this value, then press Enter.
    Enter(String),
    /// Click "all tags".
    All,
    /// Click the remove glyph of this chip.
    Remove(String),
    /// Replace the search term.
    Search(String),
    /// Click the search clear control.
    Clear,
    /// Click the page outside every picker.
    Outside,
    /// Validate every picker and submit when all pass.
    Submit,
    /// Write markup to the output.
    Render,
}

/// A parsed, non-empty script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    /// 1-based line number in the source text.
    pub line: usize,
    /// Explicit `@N` target.
    pub widget: Option<usize>,
    /// What to do.
    pub command: Command,
}

/// Parse a whole script.
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>, HarnessError> {
    let mut lines = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        if let Some(line) = parse_line(idx + 1, raw)? {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn parse_line(line: usize, raw: &str) -> Result<Option<ScriptLine>, HarnessError> {
    let mut rest = raw.trim();
    if rest.is_empty() || rest.starts_with('#') {
        return Ok(None);
    }

    let mut widget = None;
    if let Some(prefixed) = rest.strip_prefix('@') {
        let (index, tail) = prefixed
            .split_once(char::is_whitespace)
            .ok_or_else(|| HarnessError::script(line, "missing command after widget index"))?;
        let index = index
            .parse::<usize>()
            .map_err(|_| HarnessError::script(line, format!("invalid widget index `{index}`")))?;
        widget = Some(index);
        rest = tail.trim_start();
    }

    let (word, arg) = match rest.split_once(char::is_whitespace) {
        Some((word, arg)) => (word, arg.trim()),
        None => (rest, ""),
    };

    let value = |name: &str| {
        if arg.is_empty() {
            Err(HarnessError::script(line, format!("`{name}` needs a value")))
        } else {
            Ok(arg.to_owned())
        }
    };
    let bare = |command: Command| {
        if arg.is_empty() {
            Ok(command)
        } else {
            Err(HarnessError::script(
                line,
                format!("`{word}` takes no arguments"),
            ))
        }
    };

    let command = match word {
        "open" => bare(Command::Open)?,
        "toggle" => Command::Toggle(value(word)?),
        "enter" => Command::Enter(value(word)?),
        "all" => bare(Command::All)?,
        "remove" => Command::Remove(value(word)?),
        "search" => Command::Search(arg.to_owned()),
        "clear" => bare(Command::Clear)?,
        "outside" => bare(Command::Outside)?,
        "submit" => bare(Command::Submit)?,
        "render" => bare(Command::Render)?,
        other => {
            return Err(HarnessError::script(
                line,
                format!("unknown command `{other}`"),
            ));
        }
    };

    Ok(Some(ScriptLine {
        line,
        widget,
        command,
    }))
}

/// Outcome of the most recent `submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// No `submit` ran.
    NotAttempted,
    /// Validation failed; nothing was submitted.
    Blocked,
    /// The submit callback ran.
    Submitted,
}

/// Pickers, registry, and submit handler driven by a script.
pub struct Session {
    registry: Registry,
    ids: Vec<WidgetId>,
    gate: SubmitGate,
    submitted: Rc<RefCell<Vec<Submission>>>,
    status: SubmitStatus,
}

impl Session {
    /// Host `config.widgets` pickers over `tags`, each pre-seeded with
    /// `config.preseed`.
    #[must_use]
    pub fn new(tags: &[TagRecord], config: &HarnessConfig) -> Self {
        let widget_config = TagSelectConfig::new().with_max_chips(config.max_chips);
        let mut registry = Registry::new();
        let ids = (0..config.widgets)
            .map(|_| {
                let select = TagSelect::from_options(tags.iter().cloned())
                    .with_config(widget_config.clone())
                    .with_preseed(&config.preseed);
                registry.register(select)
            })
            .collect();

        let submitted = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&submitted);
        let mut gate = SubmitGate::new();
        gate.on_submit(move |submission: &Submission| sink.borrow_mut().push(submission.clone()));

        Self {
            registry,
            ids,
            gate,
            submitted,
            status: SubmitStatus::NotAttempted,
        }
    }

    /// The hosted pickers.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Picker ids by script index.
    #[must_use]
    pub fn ids(&self) -> &[WidgetId] {
        &self.ids
    }

    /// Outcome of the last `submit` command.
    #[must_use]
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Every submission the callback received.
    #[must_use]
    pub fn submissions(&self) -> Vec<Submission> {
        self.submitted.borrow().clone()
    }

    /// Run a parsed script, writing `render` and `submit` output to `out`.
    pub fn run<W: Write>(&mut self, script: &[ScriptLine], out: &mut W) -> Result<(), HarnessError> {
        for line in script {
            self.run_line(line, out)?;
        }
        Ok(())
    }

    /// Run one command.
    pub fn run_line<W: Write>(&mut self, line: &ScriptLine, out: &mut W) -> Result<(), HarnessError> {
        let index = line.widget.unwrap_or(0);
        let id = *self.ids.get(index).ok_or_else(|| {
            HarnessError::script(
                line.line,
                format!("no widget {index} (hosting {})", self.ids.len()),
            )
        })?;
        tagpick_core::trace!(line = line.line, widget = index, command = ?line.command);

        let event = match &line.command {
            Command::Open => Event::Click(Target::SelectBox),
            Command::Toggle(value) => Event::Click(Target::Option(value.clone())),
            Command::Enter(value) => {
                self.registry
                    .dispatch(Some(id), &Event::Focus(Target::Option(value.clone())));
                Event::enter()
            }
            Command::All => Event::Click(Target::AllTags),
            Command::Remove(value) => Event::Click(Target::ChipRemove(value.clone())),
            Command::Search(term) => Event::Input(term.clone()),
            Command::Clear => Event::Click(Target::Clear),
            Command::Outside => {
                self.registry.dispatch(None, &Event::Click(Target::Document));
                return Ok(());
            }
            Command::Submit => {
                self.submit(out)?;
                return Ok(());
            }
            Command::Render => {
                let html = match line.widget {
                    Some(_) => self.registry.get(id).map(|select| render_to_string(select)),
                    None => Some(render_to_string(&self.registry)),
                };
                if let Some(html) = html {
                    out.write_all(html.as_bytes())?;
                }
                return Ok(());
            }
        };
        self.registry.dispatch(Some(id), &event);
        Ok(())
    }

    fn submit<W: Write>(&mut self, out: &mut W) -> Result<(), HarnessError> {
        match self.gate.submit(&mut self.registry) {
            Some(submission) => {
                self.status = SubmitStatus::Submitted;
                writeln!(out, "submit: ok")?;
                for (id, value) in &submission.fields {
                    writeln!(out, "  {id} = {value}")?;
                }
            }
            None => {
                self.status = SubmitStatus::Blocked;
                let blocked: Vec<String> = self
                    .registry
                    .iter()
                    .filter(|(_, select)| select.error_visible())
                    .map(|(id, _)| id.to_string())
                    .collect();
                writeln!(out, "submit: blocked ({})", blocked.join(", "))?;
            }
        }
        Ok(())
    }

    /// Print every picker's hidden input value and the submit outcome.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for (id, select) in self.registry.iter() {
            writeln!(out, "{id}: {}", select.hidden_input_value())?;
        }
        let status = match self.status {
            SubmitStatus::NotAttempted => "not attempted",
            SubmitStatus::Blocked => "blocked",
            SubmitStatus::Submitted => "submitted",
        };
        writeln!(out, "submission: {status}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(text: &str) -> ScriptLine {
        let mut lines = parse_script(text).unwrap();
        assert_eq!(lines.len(), 1);
        lines.remove(0)
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let lines = parse_script("\n# pick languages\n   \nopen\n").unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].line, 4);
        assert_eq!(lines[0].command, Command::Open);
    }

    #[test]
    fn parses_arguments_and_targets() {
        assert_eq!(parse_one("toggle 2").command, Command::Toggle("2".into()));
        assert_eq!(parse_one("enter  3 ").command, Command::Enter("3".into()));
        assert_eq!(
            parse_one("search type script").command,
            Command::Search("type script".into())
        );
        assert_eq!(parse_one("search").command, Command::Search(String::new()));

        let line = parse_one("@1 remove 4");
        assert_eq!(line.widget, Some(1));
        assert_eq!(line.command, Command::Remove("4".into()));
    }

    #[test]
    fn unknown_command_reports_line() {
        let err = parse_script("open\n\nfrob 1\n").unwrap_err();
        assert!(matches!(err, HarnessError::Script { line: 3, .. }));
        assert!(err.to_string().contains("unknown command `frob`"));
    }

    #[test]
    fn missing_value_is_an_error() {
        let err = parse_script("toggle").unwrap_err();
        assert!(matches!(err, HarnessError::Script { line: 1, .. }));
    }

    #[test]
    fn extra_arguments_are_an_error() {
        assert!(parse_script("open now").is_err());
    }

    #[test]
    fn bad_widget_prefix() {
        assert!(parse_script("@x open").is_err());
        assert!(parse_script("@1").is_err());
    }

    #[test]
    fn out_of_range_widget_fails_at_run_time() {
        let mut session = Session::new(&crate::source::sample_tags(), &HarnessConfig::default());
        let script = parse_script("@2 open").unwrap();
        let err = session.run(&script, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, HarnessError::Script { line: 1, .. }));
    }

    #[test]
    fn session_drives_pickers_and_submits() {
        let config = HarnessConfig {
            widgets: 2,
            ..HarnessConfig::default()
        };
        let mut session = Session::new(&crate::source::sample_tags(), &config);
        let script = parse_script(
            "open\ntoggle 1\nenter 2\n@1 all\n@1 remove 3\noutside\nsubmit\n",
        )
        .unwrap();
        let mut out = Vec::new();
        session.run(&script, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "submit: ok\n  tag-select-0 = 1, 2\n  tag-select-1 = 1, 2, 4, 5, 6\n"
        );
        assert_eq!(session.status(), SubmitStatus::Submitted);
        assert_eq!(session.submissions().len(), 1);
        assert!(session.registry().iter().all(|(_, s)| !s.is_open()));
    }

    #[test]
    fn blocked_submit_names_empty_pickers() {
        let config = HarnessConfig {
            widgets: 2,
            preseed: vec!["5".into()],
            ..HarnessConfig::default()
        };
        let mut session = Session::new(&crate::source::sample_tags(), &config);
        let script = parse_script("@1 remove 5\nsubmit\n").unwrap();
        let mut out = Vec::new();
        session.run(&script, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "submit: blocked (tag-select-1)\n");
        assert_eq!(session.status(), SubmitStatus::Blocked);
        assert!(session.submissions().is_empty());

        let mut summary = Vec::new();
        session.write_summary(&mut summary).unwrap();
        assert_eq!(
            String::from_utf8(summary).unwrap(),
            "tag-select-0: 5\ntag-select-1: \nsubmission: blocked\n"
        );
    }
}
