//! Built-in question bank: the Q-Line HR web-fundamentals assessment.

use super::question::Question;

const HR_ASSESSMENT: [(&str, [&str; 4], usize); 10] = [
    (
        "JavaScript'te değişken tanımlamak için hangi anahtar kelimeler kullanılır?",
        ["var, let, const", "int, float, string", "define, declare, assign", "variable, value, data"],
        0,
    ),
    (
        "HTML'de sayfa başlığını belirlemek için hangi etiket kullanılır?",
        ["<header>", "<h1>", "<title>", "<head>"],
        2,
    ),
    (
        "CSS'te bir elementin arka plan rengini değiştirmek için hangi özellik kullanılır?",
        ["color", "background-color", "bg-color", "fill"],
        1,
    ),
    (
        "JavaScript'te bir dizinin eleman sayısını öğrenmek için hangi özellik kullanılır?",
        ["size", "count", "length", "total"],
        2,
    ),
    (
        "Responsive tasarım için CSS'te hangi teknik yaygın olarak kullanılır?",
        ["Tables", "Media Queries", "Frames", "Flash"],
        1,
    ),
    (
        "Git'te değişiklikleri kaydetmek için hangi komut kullanılır?",
        ["git push", "git save", "git commit", "git update"],
        2,
    ),
    (
        "JavaScript'te bir fonksiyonu tanımlamak için hangi anahtar kelime kullanılır?",
        ["function", "def", "func", "method"],
        0,
    ),
    (
        "HTML'de bir listeyi oluşturmak için hangi etiket kullanılır?",
        ["<list>", "<ol> veya <ul>", "<menu>", "<items>"],
        1,
    ),
    (
        "CSS'te flex container oluşturmak için hangi özellik kullanılır?",
        ["display: flex", "flex: true", "layout: flex", "position: flex"],
        0,
    ),
    (
        "JavaScript'te DOM'dan bir elementi seçmek için hangi method kullanılır?",
        ["getElement()", "selectElement()", "querySelector()", "findElement()"],
        2,
    ),
];

/// The ten-question assessment shown on the careers page.
pub fn hr_assessment() -> Vec<Question> {
    HR_ASSESSMENT
        .iter()
        .map(|(prompt, choices, correct)| Question {
            prompt: (*prompt).to_string(),
            choices: (*choices).map(str::to_string),
            correct: *correct,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::CHOICE_COUNT;

    #[test]
    fn has_ten_well_formed_questions() {
        let bank = hr_assessment();
        assert_eq!(bank.len(), 10);
        for q in &bank {
            assert!(q.correct_choice() < CHOICE_COUNT);
            assert!(!q.prompt().is_empty());
        }
    }

    #[test]
    fn answer_key_matches_site() {
        let key: Vec<usize> = hr_assessment().iter().map(|q| q.correct_choice()).collect();
        assert_eq!(key, vec![0, 2, 1, 2, 1, 2, 0, 1, 0, 2]);
    }
}
