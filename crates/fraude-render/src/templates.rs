//! Built-in templates for each site widget.
//!
//! Rendered with `trim_blocks` and `lstrip_blocks`, so block tags on their
//! own line leave no blank lines behind.

pub const QUESTION: &str = r#"{{ ("Soru " ~ position ~ "/" ~ total) | style("muted") }}  {{ ("Puan: " ~ score) | style("accent") }}
{{ progress_bar | style("accent") }} {{ progress_percent }}%

{{ prompt | style("prompt") }}
{% for choice in choices %}
  {{ (choice.letter ~ ") " ~ choice.text) | style(choice.style) }}
{% endfor %}
{% if reveal %}

{{ reveal.verdict | style(reveal.style) }}{% if not reveal.is_correct %} Doğru cevap: {{ reveal.correct_text | style("correct") }}{% endif %}

{% elif can_advance %}

{{ "Sonraki Soru →" | style("accent") }}
{% endif %}
"#;

pub const RESULT: &str = r#"{{ icon }} {{ title | style(tier_style) }}
{{ message }}

{{ "Puan" | pad(14) }}{{ (score ~ " / " ~ max_score) | style("total") }}
{{ "Toplam Soru" | pad(14) }}{{ total }}
{{ "Doğru" | pad(14) }}{{ correct | style("correct") }}
{{ "Yanlış" | pad(14) }}{{ incorrect | style("wrong") }}
{{ "Başarı Oranı" | pad(14) }}{{ success_rate | style("accent") }}
"#;

pub const QUOTE: &str = r#"{{ "Maliyet Detayı" | style("title") }}
{% for line in lines %}
{{ line.label }} {{ line.amount | amount | style("amount") }}
{% endfor %}
{{ total_label }} {{ total | amount | style("total") }}
"#;

pub const STAT: &str = r#"{{ icon }} {{ stat | style("stat") }}
{{ title | style("prompt") }}
{{ description | style("muted") }}
{{ "◀" | style("muted") }} {{ dots }} {{ "▶" | style("muted") }}
"#;

pub const NOTIFICATION: &str = r#"{{ icon }} {{ label | style("accent") }}"#;

pub const APPEARANCE: &str = r#"{{ toggle_icon }} data-theme="{{ data_theme }}"{% if background %} background="{{ background }}" color="{{ text_color }}"{% endif %}"#;

/// Name and source of every built-in template.
pub const BUILTIN: [(&str, &str); 6] = [
    ("question", QUESTION),
    ("result", RESULT),
    ("quote", QUOTE),
    ("stat", STAT),
    ("notification", NOTIFICATION),
    ("appearance", APPEARANCE),
];
