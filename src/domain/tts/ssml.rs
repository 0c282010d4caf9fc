use super::prosody::Prosody;

pub const SSML_CONTENT_TYPE: &str = "application/ssml+xml";

/// SSML payload sent to the synthesis provider: one voice, one prosody span
#[derive(Debug, Clone)]
pub struct SsmlDocument<'a> {
    language: &'a str,
    voice: &'a str,
    prosody: &'a Prosody,
    text: &'a str,
}

impl<'a> SsmlDocument<'a> {
    pub fn new(language: &'a str, voice: &'a str, prosody: &'a Prosody, text: &'a str) -> Self {
        Self {
            language,
            voice,
            prosody,
            text,
        }
    }

    pub fn render(&self) -> String {
        let language = escape_xml(self.language);
        format!(
            "<speak version='1.0' xml:lang='{language}'>\
             <voice xml:lang='{language}' name='{voice}'>\
             <prosody rate='{rate}' pitch='{pitch}' volume='{volume}'>\
             {text}\
             </prosody>\
             </voice>\
             </speak>",
            language = language,
            voice = escape_xml(self.voice),
            rate = self.prosody.rate,
            pitch = self.prosody.pitch,
            volume = self.prosody.volume,
            text = escape_xml(self.text),
        )
    }
}

/// Escape the five XML special characters so user input stays character data
pub fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
