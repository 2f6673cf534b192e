use crate::models::GestationParams;

pub fn development_prompt(params: &GestationParams) -> String {
    let weeks = params.weeks;
    let days = params.days_or_zero();
    let language = params.language();
    let label = language.label();
    let name = language.name();
    let script = language.script_name();

    format!(
        r#"You are a prenatal development expert. Provide detailed information about fetal development at {weeks} weeks and {days} days of pregnancy.

IMPORTANT: Respond in {label} language.

Please respond ONLY with a JSON object (no markdown, no backticks, no preamble) with this exact structure:
{{
  "icon": "single emoji representing the baby at this stage",
  "length": "length in cm or mm as string with unit in {name}",
  "weight": "weight in grams as string with unit in {name}",
  "comparison": "comparison to a fruit/vegetable with emoji and text in {name}",
  "title": "Week X: Brief descriptive title in {name}",
  "description": "2-3 sentence description in {name}",
  "developments": ["development 1", "development 2", "development 3", "development 4"]
}}

Be medically accurate and supportive in tone. All text must be in {script}."#
    )
}

pub fn exercise_prompt(params: &GestationParams) -> String {
    let weeks = params.weeks;
    let days = params.days_or_zero();
    let language = params.language();
    let label = language.label();
    let name = language.name();
    let script = language.script_name();

    format!(
        r#"You are a prenatal fitness expert. Provide safe exercise recommendations for a pregnant woman at {weeks} weeks and {days} days of pregnancy.

IMPORTANT: Respond in {label} language.

Please respond ONLY with a JSON object (no markdown, no backticks, no preamble) with this exact structure:
{{
  "intro": "Brief introduction about exercise at this stage in {name} (2-3 sentences)",
  "exercises": [
    {{
      "name": "Exercise name",
      "emoji": "relevant emoji",
      "description": "How to do it",
      "benefits": "Benefits"
    }}
  ]
}}

Provide 4-5 safe exercises appropriate for {weeks} weeks of pregnancy. Consider trimester-specific needs. All text must be in {script}."#
    )
}
