//! Typed terminal commands and their mapping onto core messages.
//!
//! Positions are 1-based and refer to the lists of the last render: `pick`/`drop` to the
//! industry list, `all`/`clear`/`check` to the niche panels and the niches inside them.

use picker_core::{AppViewModel, Msg};

pub(crate) const HELP: &str = "\
Commands:
  search <text>              filter the industry list
  filter <text>              filter niches in every panel
  pick <#|industry>          add an industry to the selection
  drop <#|industry>          remove an industry from the selection
  choose <a>; <b>; ...       replace the selected industries
  all <#|industry>           check every visible niche of a panel
  clear <#|industry>         uncheck every visible niche of a panel
  check <panel#> <niche#>    check a niche (or: check <industry> :: <niche>)
  uncheck <panel#> <niche#>  uncheck a niche
  json | csv                 download selections.json / selections.csv
  link                       print the share link
  url                        update the location with the share link
  show                       render the form again
  help                       show this text
  quit                       leave";

/// Reference to a list entry, by position or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Target {
    Index(usize),
    Name(String),
}

impl Target {
    fn parse(text: &str) -> Self {
        let text = text.trim();
        match text.parse::<usize>() {
            Ok(index) => Target::Index(index),
            Err(_) => Target::Name(text.to_string()),
        }
    }

    fn resolve<'a>(&self, names: impl Iterator<Item = &'a str>) -> Option<String> {
        let mut names = names;
        match self {
            Target::Index(0) => None,
            Target::Index(index) => names.nth(index - 1).map(ToOwned::to_owned),
            Target::Name(name) => names.find(|n| *n == name.as_str()).map(ToOwned::to_owned),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    SearchIndustries(String),
    FilterNiches(String),
    Pick(Target),
    Drop(Target),
    Choose(Vec<String>),
    SelectAll(Target),
    Clear(Target),
    Check {
        panel: Target,
        niche: Target,
        checked: bool,
    },
    DownloadJson,
    DownloadCsv,
    ShowLink,
    UpdateUrl,
    Show,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub(crate) fn parse(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }
    let line = line.trim_start();
    let (verb, rest) = match line.split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "search" => Command::SearchIndustries(rest.to_string()),
        "filter" => Command::FilterNiches(rest.to_string()),
        "pick" => Command::Pick(required_target(verb, rest)?),
        "drop" => Command::Drop(required_target(verb, rest)?),
        "choose" => Command::Choose(
            rest.split(';')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
        ),
        "all" => Command::SelectAll(required_target(verb, rest)?),
        "clear" => Command::Clear(required_target(verb, rest)?),
        "check" => parse_check(rest, true)?,
        "uncheck" => parse_check(rest, false)?,
        "json" => Command::DownloadJson,
        "csv" => Command::DownloadCsv,
        "link" => Command::ShowLink,
        "url" => Command::UpdateUrl,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("Unknown command '{other}'. Type 'help'.")),
    };
    Ok(Some(command))
}

fn required_target(verb: &str, rest: &str) -> Result<Target, String> {
    if rest.trim().is_empty() {
        return Err(format!("'{verb}' needs a number or a name."));
    }
    Ok(Target::parse(rest))
}

fn parse_check(rest: &str, checked: bool) -> Result<Command, String> {
    let (panel, niche) = match rest.split_once("::") {
        Some((industry, niche)) => (
            Target::Name(industry.trim().to_string()),
            Target::Name(niche.trim().to_string()),
        ),
        None => {
            let mut parts = rest.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(panel), Some(niche), None) => (Target::parse(panel), Target::parse(niche)),
                _ => {
                    return Err(
                        "Use 'check <panel#> <niche#>' or 'check <industry> :: <niche>'.".into(),
                    )
                }
            }
        }
    };
    Ok(Command::Check {
        panel,
        niche,
        checked,
    })
}

/// Maps a command onto the message it stands for, resolving positions against `view`.
///
/// Commands handled by the shell itself (`show`, `help`, `link`, `quit`) return `Ok(None)`.
pub(crate) fn to_msg(command: &Command, view: &AppViewModel) -> Result<Option<Msg>, String> {
    let industries = || view.visible_industries.iter().map(String::as_str);
    let panels = || view.panels.iter().map(|p| p.industry.as_str());

    let msg = match command {
        Command::SearchIndustries(text) => Msg::IndustryQueryChanged(text.clone()),
        Command::FilterNiches(text) => Msg::NicheQueryChanged(text.clone()),
        Command::Pick(target) | Command::Drop(target) => {
            let industry = target
                .resolve(industries())
                .ok_or_else(|| format!("No visible industry {}.", describe(target)))?;
            Msg::IndustryToggled {
                industry,
                selected: matches!(command, Command::Pick(_)),
            }
        }
        Command::Choose(names) => Msg::IndustriesChosen(names.clone()),
        Command::SelectAll(target) | Command::Clear(target) => {
            let industry = target
                .resolve(panels())
                .ok_or_else(|| format!("No open panel {}.", describe(target)))?;
            if matches!(command, Command::SelectAll(_)) {
                Msg::SelectAllClicked { industry }
            } else {
                Msg::ClearClicked { industry }
            }
        }
        Command::Check {
            panel,
            niche,
            checked,
        } => {
            let industry = panel
                .resolve(panels())
                .ok_or_else(|| format!("No open panel {}.", describe(panel)))?;
            let niche = view
                .panels
                .iter()
                .find(|p| p.industry == industry)
                .and_then(|p| niche.resolve(p.niches.iter().map(|row| row.niche.as_str())))
                .ok_or_else(|| format!("No visible niche {} under {industry}.", describe(niche)))?;
            Msg::NicheToggled {
                industry,
                niche,
                checked: *checked,
            }
        }
        Command::DownloadJson => Msg::DownloadJsonClicked,
        Command::DownloadCsv => Msg::DownloadCsvClicked,
        Command::UpdateUrl => Msg::UpdateUrlClicked,
        Command::ShowLink | Command::Show | Command::Help | Command::Quit => return Ok(None),
    };
    Ok(Some(msg))
}

fn describe(target: &Target) -> String {
    match target {
        Target::Index(index) => format!("#{index}"),
        Target::Name(name) => format!("'{name}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker_core::{IndustryPanelView, NicheRowView};
    use pretty_assertions::assert_eq;

    fn view() -> AppViewModel {
        AppViewModel {
            visible_industries: vec!["Real Estate".into(), "Tech".into()],
            selected_industries: vec!["Tech".into()],
            panels: vec![IndustryPanelView {
                industry: "Tech".into(),
                niches: vec![
                    NicheRowView {
                        niche: "AI".into(),
                        checked: false,
                    },
                    NicheRowView {
                        niche: "Web Apps".into(),
                        checked: true,
                    },
                ],
            }],
            ..AppViewModel::default()
        }
    }

    fn msg(line: &str) -> Result<Option<Msg>, String> {
        let command = parse(line)?.expect("command");
        to_msg(&command, &view())
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse("   \n"), Ok(None));
    }

    #[test]
    fn search_text_keeps_inner_spaces_and_may_be_empty() {
        assert_eq!(
            parse("search real  estate"),
            Ok(Some(Command::SearchIndustries("real  estate".into())))
        );
        assert_eq!(parse("filter"), Ok(Some(Command::FilterNiches(String::new()))));
    }

    #[test]
    fn pick_resolves_positions_and_names() {
        assert_eq!(
            msg("pick 1"),
            Ok(Some(Msg::IndustryToggled {
                industry: "Real Estate".into(),
                selected: true
            }))
        );
        assert_eq!(
            msg("drop Tech"),
            Ok(Some(Msg::IndustryToggled {
                industry: "Tech".into(),
                selected: false
            }))
        );
        assert!(msg("pick 3").is_err());
        assert!(msg("pick 0").is_err());
        assert!(parse("pick").is_err());
    }

    #[test]
    fn check_accepts_indices_or_names() {
        let expected = Ok(Some(Msg::NicheToggled {
            industry: "Tech".into(),
            niche: "Web Apps".into(),
            checked: true,
        }));
        assert_eq!(msg("check 1 2"), expected);
        assert_eq!(msg("check Tech :: Web Apps"), expected);
        assert_eq!(
            msg("uncheck 1 1"),
            Ok(Some(Msg::NicheToggled {
                industry: "Tech".into(),
                niche: "AI".into(),
                checked: false,
            }))
        );
        assert!(msg("check 1 9").is_err());
        assert!(msg("check 1").is_err());
    }

    #[test]
    fn panel_actions_target_open_panels_only() {
        assert_eq!(
            msg("all 1"),
            Ok(Some(Msg::SelectAllClicked {
                industry: "Tech".into()
            }))
        );
        assert_eq!(
            msg("clear Tech"),
            Ok(Some(Msg::ClearClicked {
                industry: "Tech".into()
            }))
        );
        assert!(msg("all Real Estate").is_err());
    }

    #[test]
    fn choose_splits_on_semicolons() {
        assert_eq!(
            msg("choose Tech; Real Estate;"),
            Ok(Some(Msg::IndustriesChosen(vec![
                "Tech".into(),
                "Real Estate".into()
            ])))
        );
    }

    #[test]
    fn shell_commands_have_no_message() {
        for line in ["show", "help", "link", "QUIT"] {
            assert_eq!(msg(line), Ok(None));
        }
        assert!(parse("dance").is_err());
    }
}
