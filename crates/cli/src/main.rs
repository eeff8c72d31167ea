#![forbid(unsafe_code)]

mod params;
mod sink;

use std::path::Path;

use params::ViewParams;
use sink::MarkdownSink;
use tl_core::config::ViewConfig;
use tl_core::pipeline::run_view;
use tl_vault::MarkdownVault;

fn usage() -> &'static str {
    "tasklens — consolidated open-task view over a Markdown note vault\n\n\
USAGE:\n\
  tasklens --vault DIR --page NAME [OPTIONS]\n\
\n\
FLAGS:\n\
  -h, --help            Print this help and exit\n\
  -V, --version         Print version and exit\n\
\n\
OPTIONS:\n\
  --vault DIR           Note vault root directory (required)\n\
  --page NAME           Focal page name or vault-relative path (required)\n\
  --params FILE         JSON options file; flags below override it\n\
  --no-this-page        Skip the focal page's own tasks\n\
  --no-tagged-anywhere  Skip alias/tag-matched tasks from other pages\n\
  --no-tagged-pages     Skip pages carrying the focal tag\n\
  --no-included         Skip pages listed in includeTasksFrom\n\
  --no-children         Skip pages listed in children\n\
  --linked              Also collect from outbound links\n\
  --any-tag             Match aliases even in tasks carrying other tags\n\
  --avoid FOLDER        Folder to skip (repeatable; replaces defaults)\n\
  --exclude WORD        Drop tasks containing WORD (repeatable)\n\
  --exclude-from PAGE   Drop tasks from PAGE (repeatable)\n\
  --no-sections         Flat per-file listing without section headings\n\
  --no-summary          Omit the task-count line\n\
  --debug               Emit selection diagnostics\n"
}

fn version_line() -> String {
    format!("tasklens {}", env!("CARGO_PKG_VERSION"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-h" | "--help"))
    {
        print!("{}", usage());
        return Ok(());
    }
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-V" | "--version"))
    {
        println!("{}", version_line());
        return Ok(());
    }

    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(message) => {
            eprintln!("error: {message}");
            eprint!("{}", usage());
            std::process::exit(2);
        }
    };

    let mut cfg = ViewConfig::default();
    if let Some(path) = &invocation.params_file {
        let raw = std::fs::read_to_string(path)?;
        let params: ViewParams = serde_json::from_str(&raw)?;
        params.apply(&mut cfg);
    }
    invocation.apply(&mut cfg);

    let vault = MarkdownVault::open(Path::new(&invocation.vault_dir))?;
    let today = time::OffsetDateTime::now_utc().date();

    let stdout = std::io::stdout();
    let mut sink = MarkdownSink::new(stdout.lock());
    // A missing target page is reported inline by the pipeline; the process
    // still exits cleanly.
    let _ = run_view(&vault, &cfg, today, &mut sink);
    Ok(())
}

#[derive(Debug, Default)]
struct Invocation {
    vault_dir: String,
    page: Option<String>,
    params_file: Option<String>,
    no_this_page: bool,
    no_tagged_anywhere: bool,
    no_tagged_pages: bool,
    no_included: bool,
    no_children: bool,
    linked: bool,
    any_tag: bool,
    avoid: Vec<String>,
    exclude: Vec<String>,
    exclude_from: Vec<String>,
    no_sections: bool,
    no_summary: bool,
    debug: bool,
}

impl Invocation {
    /// Flags are the last word: they override both defaults and the params
    /// file.
    fn apply(&self, cfg: &mut ViewConfig) {
        if let Some(page) = &self.page {
            cfg.page = Some(page.clone());
        }
        if self.no_this_page {
            cfg.tasks_from_this_page = false;
        }
        if self.no_tagged_anywhere {
            cfg.tagged_tasks_from_anywhere = false;
        }
        if self.no_tagged_pages {
            cfg.tasks_from_tagged_pages = false;
        }
        if self.no_included {
            cfg.tasks_from_included_pages = false;
        }
        if self.no_children {
            cfg.tasks_from_children_pages = false;
        }
        if self.linked {
            cfg.tasks_from_linked_pages = true;
        }
        if self.any_tag {
            cfg.if_task_tagged_then_only_if_our_tag = false;
        }
        if !self.avoid.is_empty() {
            cfg.avoid_folders = self.avoid.clone();
        }
        if !self.exclude.is_empty() {
            cfg.exclude_tasks_with = Some(self.exclude.clone());
        }
        if !self.exclude_from.is_empty() {
            cfg.exclude_tasks_from = Some(self.exclude_from.clone());
        }
        if self.no_sections {
            cfg.include_section = false;
        }
        if self.no_summary {
            cfg.summary = false;
        }
        if self.debug {
            cfg.debug = true;
        }
    }
}

fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let mut invocation = Invocation::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--vault" => invocation.vault_dir = value_of(&mut iter, "--vault")?,
            "--page" => invocation.page = Some(value_of(&mut iter, "--page")?),
            "--params" => invocation.params_file = Some(value_of(&mut iter, "--params")?),
            "--no-this-page" => invocation.no_this_page = true,
            "--no-tagged-anywhere" => invocation.no_tagged_anywhere = true,
            "--no-tagged-pages" => invocation.no_tagged_pages = true,
            "--no-included" => invocation.no_included = true,
            "--no-children" => invocation.no_children = true,
            "--linked" => invocation.linked = true,
            "--any-tag" => invocation.any_tag = true,
            "--avoid" => invocation.avoid.push(value_of(&mut iter, "--avoid")?),
            "--exclude" => invocation.exclude.push(value_of(&mut iter, "--exclude")?),
            "--exclude-from" => invocation
                .exclude_from
                .push(value_of(&mut iter, "--exclude-from")?),
            "--no-sections" => invocation.no_sections = true,
            "--no-summary" => invocation.no_summary = true,
            "--debug" => invocation.debug = true,
            other => return Err(format!("unknown argument '{other}'")),
        }
    }
    if invocation.vault_dir.is_empty() {
        return Err("--vault DIR is required".to_string());
    }
    if invocation.page.is_none() && invocation.params_file.is_none() {
        return Err("--page NAME is required (or thePage in --params)".to_string());
    }
    Ok(invocation)
}

fn value_of(iter: &mut std::slice::Iter<'_, String>, flag: &str) -> Result<String, String> {
    match iter.next() {
        Some(value) => Ok(value.clone()),
        None => Err(format!("{flag} needs a value")),
    }
}
