//! Starter data: six categories and a question set per category

use trivia_core::NewQuestion;

use crate::store::{StoreResult, TriviaStore};

/// Category names, inserted in this order
pub const CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// (question, answer, index into [`CATEGORIES`], difficulty)
pub const QUESTIONS: &[(&str, &str, usize, i32)] = &[
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 3, 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 3, 1),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 4, 4),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 4, 3),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 5, 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 5, 4),
    ("Who invented Peanut Butter?", "George Washington Carver", 3, 2),
    ("What is the largest lake in Africa?", "Lake Victoria", 2, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 2, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 2, 2),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 1, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 1, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 1, 4),
    ("Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 1, 2),
    ("What is the heaviest organ in the human body?", "The Liver", 0, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 0, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 0, 4),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 3, 4),
];

/// What a seed run inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub questions: usize,
}

/// Insert the starter data unless the store already has categories.
pub async fn run(store: &dyn TriviaStore) -> StoreResult<SeedReport> {
    if !store.categories().await?.is_empty() {
        tracing::info!("Store already has categories, skipping seed");
        return Ok(SeedReport::default());
    }

    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for name in CATEGORIES {
        category_ids.push(store.insert_category(name).await?);
    }

    for &(question, answer, category, difficulty) in QUESTIONS {
        store
            .insert_question(NewQuestion {
                question: Some(question.to_owned()),
                answer: Some(answer.to_owned()),
                category: Some(category_ids[category]),
                difficulty: Some(difficulty),
            })
            .await?;
    }

    let report = SeedReport {
        categories: category_ids.len(),
        questions: QUESTIONS.len(),
    };
    tracing::info!(
        categories = report.categories,
        questions = report.questions,
        "Seed data inserted"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn question_categories_in_range() {
        assert!(QUESTIONS.iter().all(|q| q.2 < CATEGORIES.len()));
    }

    #[tokio::test]
    async fn seeds_once() {
        let store = MemoryStore::new();
        let first = run(&store).await.unwrap();
        assert_eq!(first.categories, 6);
        assert_eq!(first.questions, QUESTIONS.len());

        let second = run(&store).await.unwrap();
        assert_eq!(second, SeedReport::default());
        assert_eq!(store.questions().await.unwrap().len(), QUESTIONS.len());
    }
}
