use anyhow::Result;
use cliclack::confirm;

pub fn prompt_yes_no(prompt: &str) -> Result<bool> {
    let mut confirm_prompt = confirm(prompt.to_string()).initial_value(false);
    let answer = confirm_prompt.interact()?;
    Ok(answer)
}
