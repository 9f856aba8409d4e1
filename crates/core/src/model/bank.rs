use crate::model::Question;

pub const QUESTION_COUNT: usize = 10;

/// The fixed question list, in play order.
#[must_use]
pub fn question_bank() -> Vec<Question> {
    vec![
        Question::new(
            "Which keyword is used to define a constant in Swift?",
            ["constant", "var", "let", "const"],
            "let",
        ),
        Question::new(
            "What is the shorthand notation for incrementing a variable in Swift?",
            [
                "increment(variable)",
                "variable = variable + 1",
                "variable += 1",
                "variable++",
            ],
            "variable += 1",
        ),
        Question::new(
            "Which type of loop is used to iterate over a sequence of items in Swift?",
            ["if statement", "while loop", "repeat-while loop", "for-in loop"],
            "for-in loop",
        ),
        Question::new(
            "What is the purpose of the 'guard' statement in Swift?",
            [
                "To check for equality between two values",
                "To define a new scope for variables and constants",
                "To handle errors and exceptions",
                "To exit early from a function or method if a condition is not met",
            ],
            "To exit early from a function or method if a condition is not met",
        ),
        Question::new(
            "What is Swift?",
            [
                "A superhero",
                "A type of bird",
                "A popular music genre",
                "A programming language developed by Apple",
            ],
            "A programming language developed by Apple",
        ),
        Question::new(
            "What is Taylor Swift's full name?",
            [
                "Taylor Nicole Swift",
                "Taylor Marie Swift",
                "Taylor Elizabeth Swift",
                "Taylor Alison Swift",
            ],
            "Taylor Alison Swift",
        ),
        Question::new(
            "What is the title of Taylor Swift's debut album?",
            ["1989", "Fearless", "Speak Now", "Taylor Swift"],
            "Taylor Swift",
        ),
        Question::new(
            "Which Taylor Swift song starts with the lyrics 'We were both young when I first saw you'?",
            [
                "Shake It Off",
                "You Belong with Me",
                "Blank Space",
                "Love Story",
            ],
            "Love Story",
        ),
        Question::new(
            "In which year did Taylor Swift win her first Grammy Award?",
            ["2016", "2012", "2010", "2009"],
            "2010",
        ),
        Question::new(
            "What is Taylor Swift's best-selling album to date?",
            ["Speak Now", "Red", "Fearless", "1989"],
            "1989",
        ),
    ]
}
