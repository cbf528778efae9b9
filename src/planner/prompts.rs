pub const GREETING_REPLY: &str = "Hello! I can help you plan trips. Where would you like to go?";

pub const GREETINGS: [&str; 3] = ["hi", "hello", "hey"];

pub const ITINERARY_TEMPERATURE: f32 = 0.7;

pub const CITY_EXTRACTION_TEMPERATURE: f32 = 0.0;

pub const ITINERARY_PROMPT: &str = "\
You are a helpful AI travel buddy.
Answer concisely in short bullet points only.
Do NOT write long paragraphs or extra descriptions.
Do NOT use markdown, headings, or bold.
Follow this exact format:

Day 1:
- Morning: ...
- Afternoon: ...
- Evening: ...

Day 2:
- Morning: ...
- Afternoon: ...
- Evening: ...

Day 3:
- Morning: ...
- Afternoon: ...
- Evening: ...

Tips:
- Tip 1
- Tip 2

Keep all sentences to one line max. Only provide essential info for each time slot. No extra text.
";

pub const CITY_EXTRACTION_PROMPT: &str =
    "Extract only the main city name from this query. Reply with just the city, nothing else.";
