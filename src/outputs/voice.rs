use anyhow::Result;

use crate::kernel::dispatcher::Response;

/// Seam to the speech-synthesis collaborator.
pub trait VoiceSink {
    fn speak(&mut self, response: &Response) -> Result<()>;
}

/// Prints responses instead of synthesizing them.
#[derive(Debug, Clone)]
pub struct ConsoleVoice {
    label: String,
}

impl ConsoleVoice {
    pub fn new(assistant_name: &str) -> Self {
        Self {
            label: assistant_name.to_uppercase(),
        }
    }

    pub fn line(&self, response: &Response) -> String {
        format!("[{} SPEAKS ({})] >> {}", self.label, response.language, response.text)
    }
}

impl VoiceSink for ConsoleVoice {
    fn speak(&mut self, response: &Response) -> Result<()> {
        println!("{}", self.line(response));
        Ok(())
    }
}

/// Keeps everything it is asked to say. Used by harness tests.
#[derive(Debug, Default)]
pub struct RecordingVoice {
    pub spoken: Vec<Response>,
}

impl VoiceSink for RecordingVoice {
    fn speak(&mut self, response: &Response) -> Result<()> {
        self.spoken.push(response.clone());
        Ok(())
    }
}
