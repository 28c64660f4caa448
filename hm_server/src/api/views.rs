//! HTML pages.
//!
//! Every piece of user-controlled text (player names, difficulty keys,
//! words from the catalog) goes through [`escape`] before it reaches the
//! page.

use hangman::{GameState, MAX_ATTEMPTS, game::title_case, scores::ScoreRecord};
use std::fmt::Write;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} · Hangman</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
<main>
{body}
</main>
<footer><a href="/">New game</a> · <a href="/scores">Leaderboard</a></footer>
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Start form: player name and difficulty
pub fn index_page(difficulties: &[&str], error: Option<&str>) -> String {
    let mut body = String::from("<h1>Hangman</h1>\n");
    if let Some(error) = error {
        let _ = writeln!(body, r#"<p class="error">{}</p>"#, escape(error));
    }

    body.push_str(
        r#"<form method="post" action="/">
  <label>Name <input type="text" name="username" autofocus></label>
  <label>Difficulty <select name="difficulty">
"#,
    );
    for difficulty in difficulties {
        let _ = writeln!(
            body,
            r#"    <option value="{value}">{label}</option>"#,
            value = escape(difficulty),
            label = escape(&title_case(difficulty)),
        );
    }
    body.push_str(
        r#"  </select></label>
  <button type="submit">Play</button>
</form>
"#,
    );

    layout("Start", &body)
}

/// Round in progress
pub fn game_page(state: &GameState) -> String {
    let mut body = String::new();
    let _ = writeln!(
        body,
        "<h1>{} · {}</h1>",
        escape(&title_case(state.player.as_str())),
        escape(&title_case(&state.difficulty)),
    );
    let _ = writeln!(body, r#"<p class="word">{}</p>"#, escape(&state.reveal_string()));
    let _ = writeln!(
        body,
        r#"<p class="attempts">Attempts left: {} / {MAX_ATTEMPTS}</p>"#,
        state.attempts_remaining(),
    );

    let tried: Vec<String> = state
        .tried_letters()
        .iter()
        .map(|c| escape(&c.to_string()))
        .collect();
    let _ = writeln!(body, r#"<p class="tried">Tried: {}</p>"#, tried.join(", "));

    if let Some(feedback) = state.message() {
        let _ = writeln!(body, r#"<p class="message">{feedback}</p>"#);
    }

    body.push_str(
        r#"<form method="post" action="/play">
  <input type="text" name="guess" autocomplete="off" autofocus>
  <button type="submit">Guess</button>
</form>
<form method="post" action="/hint">
  <button type="submit">Hint (costs one attempt)</button>
</form>
"#,
    );

    layout("Game", &body)
}

/// Finished round with the option to save the score
pub fn end_page(state: &GameState) -> String {
    let mut body = String::new();
    let headline = if state.is_won() { "You won!" } else { "You lost." };
    let _ = writeln!(body, "<h1>{headline}</h1>");
    let _ = writeln!(
        body,
        r#"<p>The word was <strong class="word">{}</strong>.</p>"#,
        escape(state.secret()),
    );
    let _ = writeln!(
        body,
        "<p>{} used {} of {MAX_ATTEMPTS} attempts.</p>",
        escape(&title_case(state.player.as_str())),
        state.attempts_used(),
    );
    body.push_str(
        r#"<form method="post" action="/save-score">
  <button type="submit">Save score</button>
</form>
"#,
    );

    layout("Game over", &body)
}

/// Ranked leaderboard
pub fn scores_page(records: &[&ScoreRecord]) -> String {
    let mut body = String::from("<h1>Leaderboard</h1>\n");
    if records.is_empty() {
        body.push_str("<p>No scores yet.</p>\n");
        return layout("Leaderboard", &body);
    }

    body.push_str(
        "<table>\n<thead><tr><th>#</th><th>Player</th><th>Difficulty</th><th>Word</th><th>Result</th><th>Attempts left</th><th>Date</th></tr></thead>\n<tbody>\n",
    );
    for (rank, record) in records.iter().enumerate() {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            rank + 1,
            escape(&title_case(&record.username)),
            escape(&title_case(&record.difficulty)),
            escape(&record.word),
            if record.won { "won" } else { "lost" },
            record.attempts,
            record.date.format("%Y-%m-%d %H:%M"),
        );
    }
    body.push_str("</tbody>\n</table>\n");

    layout("Leaderboard", &body)
}

pub fn not_found_page() -> String {
    layout(
        "Not found",
        "<h1>Page not found</h1>\n<p>There is nothing here.</p>\n",
    )
}

pub fn error_page(message: &str) -> String {
    layout(
        "Error",
        &format!("<h1>Something went wrong</h1>\n<p>{}</p>\n", escape(message)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use hangman::Username;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_index_page_lists_difficulties() {
        let page = index_page(&["difficile", "facile"], Some("please fill in all fields"));
        assert!(page.contains(r#"<option value="facile">Facile</option>"#));
        assert!(page.contains(r#"<option value="difficile">Difficile</option>"#));
        assert!(page.contains("please fill in all fields"));
    }

    #[test]
    fn test_game_page_escapes_player() {
        let mut state = GameState::new(Username::new("<b>eve</b>"), "facile", "chat");
        state.apply_guess("c").unwrap();

        let page = game_page(&state);
        assert!(page.contains("&lt;b&gt;eve&lt;/b&gt;"));
        assert!(!page.contains("<b>eve</b>"));
        assert!(page.contains("C _ _ _"));
        assert!(page.contains("correct letter"));
        assert!(!page.contains("CHAT"));
    }

    #[test]
    fn test_end_page_shows_word_and_attempts_used() {
        let mut state = GameState::new(Username::new("alice"), "facile", "chat");
        state.apply_guess("z").unwrap();
        state.apply_guess("chat").unwrap();

        let page = end_page(&state);
        assert!(page.contains("You won!"));
        assert!(page.contains("CHAT"));
        assert!(page.contains("used 1 of 6 attempts"));
    }

    #[test]
    fn test_scores_page() {
        let record = ScoreRecord {
            username: "alice".to_string(),
            difficulty: "facile".to_string(),
            word: "CHAT".to_string(),
            won: true,
            attempts: 5,
            date: Utc::now(),
        };

        let page = scores_page(&[&record]);
        assert!(page.contains("<td>Alice</td>"));
        assert!(page.contains("<td>won</td>"));
        assert!(scores_page(&[]).contains("No scores yet."));
    }
}
