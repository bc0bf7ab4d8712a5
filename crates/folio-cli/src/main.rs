mod render;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_config::Config;
use folio_engine::{Block as ContentBlock, PostCollection, RenderMode, Theme, io};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use render::{Palette, render_blocks};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

struct App {
    posts: PostCollection,
    default_mode: RenderMode,
    /// Forces every post into one mode; `None` honours each post's own mode.
    mode_override: Option<RenderMode>,
    theme: Theme,
    base_url: String,
    post_list_state: ListState,
    current_blocks: Vec<ContentBlock>,
    status: Option<String>,
}

impl App {
    fn new(posts: PostCollection, config: &Config) -> Self {
        let mut app = Self {
            posts,
            default_mode: config.render_mode,
            mode_override: None,
            theme: config.theme,
            base_url: config.effective_base_url(),
            post_list_state: ListState::default(),
            current_blocks: Vec::new(),
            status: None,
        };

        // Select first post if available
        if !app.posts.is_empty() {
            app.post_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        app
    }

    fn next_post(&mut self) {
        if self.posts.is_empty() {
            return;
        }
        let i = match self.post_list_state.selected() {
            Some(i) => (i + 1) % self.posts.len(),
            None => 0,
        };
        self.post_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_post(&mut self) {
        if self.posts.is_empty() {
            return;
        }
        let i = match self.post_list_state.selected() {
            Some(0) | None => self.posts.len() - 1,
            Some(i) => i - 1,
        };
        self.post_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn selected_post(&self) -> Option<&folio_engine::Post> {
        let index = self.post_list_state.selected()?;
        self.posts.iter().nth(index)
    }

    fn update_content_for_selection(&mut self) {
        self.status = None;
        self.current_blocks = match self.selected_post() {
            Some(post) => match self.mode_override {
                Some(mode) => folio_engine::format(&post.body, mode),
                None => post.blocks(self.default_mode),
            },
            None => Vec::new(),
        };
    }

    fn cycle_mode(&mut self) {
        self.mode_override = match self.mode_override {
            None => Some(RenderMode::Flat),
            Some(RenderMode::Flat) => Some(RenderMode::Sectioned),
            Some(RenderMode::Sectioned) => None,
        };
        self.update_content_for_selection();
    }

    fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
    }

    fn show_share_url(&mut self) {
        self.status = self
            .selected_post()
            .map(|post| format!("Share: {}", post.share_url(&self.base_url)));
    }

    fn mode_label(&self) -> String {
        match self.mode_override {
            Some(mode) => mode.to_string(),
            None => "post default".to_string(),
        }
    }
}

fn main() -> Result<()> {
    // Determine content path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let loaded = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} [content-folder-path]", args[0]);
            process::exit(1);
        }
    };

    let (config, from_config) = match (args.len(), loaded) {
        // CLI argument wins, other settings still come from the config file
        (2, Some(config)) => (
            Config {
                content_path: PathBuf::from(&args[1]),
                ..config
            },
            false,
        ),
        (2, None) => (Config::new(PathBuf::from(&args[1])), false),
        (1, Some(config)) => (config, true),
        (1, None) => {
            eprintln!("Error: No content path provided and no config file found");
            eprintln!("Usage: {} <content-folder-path>", args[0]);
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        _ => {
            eprintln!("Usage: {} [content-folder-path]", args[0]);
            process::exit(1);
        }
    };

    let posts = match io::load_collection(&config.content_path) {
        Ok(posts) => posts,
        Err(e) => {
            let source = if from_config {
                format!(" from config file '{}'", config_path.display())
            } else {
                String::new()
            };
            eprintln!(
                "Error: Content path '{}'{} is invalid: {e}",
                config.content_path.display(),
                source
            );
            process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(posts, &config);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_post(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_post(),
                KeyCode::Char('m') => app.cycle_mode(),
                KeyCode::Char('t') => app.cycle_theme(),
                KeyCode::Enter => app.show_share_url(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let palette = Palette::for_theme(app.theme);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // Post list panel
    let post_items: Vec<ListItem> = app
        .posts
        .iter()
        .map(|post| {
            ListItem::new(vec![
                Line::from(Span::styled(post.title.clone(), Style::default().fg(palette.text))),
                Line::from(Span::styled(
                    format!("{} · {}", post.published_date, post.read_time),
                    Style::default().fg(palette.muted),
                )),
            ])
        })
        .collect();

    let posts_list = List::new(post_items)
        .block(Block::default().borders(Borders::ALL).title("Posts"))
        .highlight_style(
            Style::default()
                .bg(palette.highlight_bg)
                .fg(palette.highlight_fg),
        );

    f.render_stateful_widget(posts_list, chunks[0], &mut app.post_list_state);

    // Content panel
    let content_text = if app.current_blocks.is_empty() {
        vec![Line::from("Select a post to read it")]
    } else {
        render_blocks(&app.current_blocks, palette)
    };

    let title = app
        .selected_post()
        .map(|post| post.title.clone())
        .unwrap_or_else(|| "Content".to_string());
    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    // Status line: share URL after Enter, otherwise key help
    let status = match &app.status {
        Some(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(palette.accent),
        )),
        None => Line::from(vec![
            Span::raw("q: Quit | ↑/k: Previous | ↓/j: Next | "),
            Span::raw(format!("m: Mode ({}) | ", app.mode_label())),
            Span::raw(format!("t: Theme ({}) | ", app.theme)),
            Span::raw("Enter: Share URL"),
        ]),
    };

    let help = Paragraph::new(vec![status]).block(Block::default());
    f.render_widget(help, rows[1]);
}
