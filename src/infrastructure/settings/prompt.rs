use crate::infrastructure::logging;
use crate::interfaces::console::ConsoleUI;
use once_cell::sync::Lazy;
use std::io;
use std::path::Path;
use tokio::fs;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;

/// One buffered stdin for the whole process, so lines read ahead by one
/// prompt are still there for the next.
static STDIN: Lazy<Mutex<BufReader<Stdin>>> =
    Lazy::new(|| Mutex::new(BufReader::new(tokio::io::stdin())));

/// Asks on stdin and returns the trimmed answer, or `default` when the answer
/// is blank.
pub async fn prompt_line(prompt: &str, default: Option<&str>) -> io::Result<Option<String>> {
    let _quiet = logging::suppress_stdout_logs();
    let mut reader = STDIN.lock().await;
    ask(&mut *reader, prompt, default).await
}

/// Returns the value stored in `file`, or asks for one and stores the answer.
pub async fn get_config(
    file: &Path,
    prompt: &str,
    default: Option<&str>,
) -> io::Result<Option<String>> {
    if let Some(stored) = read_stored(file).await {
        return Ok(Some(stored));
    }
    let answer = prompt_line(prompt, default).await?;
    persist(file, answer.as_deref()).await?;
    Ok(answer)
}

async fn read_stored(file: &Path) -> Option<String> {
    let content = fs::read_to_string(file).await.ok()?;
    let content = content.trim();
    (!content.is_empty()).then(|| content.to_string())
}

async fn persist(file: &Path, answer: Option<&str>) -> io::Result<()> {
    let Some(answer) = answer else {
        return Ok(());
    };
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(file, answer).await?;
    log::info!("settings: saved {}", file.display());
    Ok(())
}

async fn ask<R>(reader: &mut R, prompt: &str, default: Option<&str>) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    ConsoleUI::print_question(prompt, default);

    let mut input = String::new();
    reader.read_line(&mut input).await?;
    let input = input.trim();

    if input.is_empty() {
        return Ok(default.map(str::to_string));
    }
    Ok(Some(input.to_string()))
}
