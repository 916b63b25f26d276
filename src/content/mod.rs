//! Notification text pools and random selection.
//!
//! Every category owns a list of titles and a list of bodies. A draw picks
//! one of each independently and uniformly, so the title and body of a
//! notification need not come from the same entry.

mod pools;

use std::collections::HashMap;

use rand::Rng;
use thiserror::Error;

use crate::notification::NotificationCategory;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Content pool for {0} has no titles")]
    EmptyTitles(NotificationCategory),

    #[error("Content pool for {0} has no bodies")]
    EmptyBodies(NotificationCategory),

    #[error("No content pool configured for {0}")]
    MissingPool(NotificationCategory),
}

/// A title/body pair drawn from a pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedContent {
    pub title: String,
    pub body: String,
}

/// Titles and bodies for one category. Never empty once constructed.
#[derive(Debug, Clone)]
pub struct ContentPool {
    titles: Vec<String>,
    bodies: Vec<String>,
}

impl ContentPool {
    pub fn new<T, B>(
        category: NotificationCategory,
        titles: T,
        bodies: B,
    ) -> Result<Self, ContentError>
    where
        T: IntoIterator,
        T::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        let bodies: Vec<String> = bodies.into_iter().map(Into::into).collect();

        if titles.is_empty() {
            return Err(ContentError::EmptyTitles(category));
        }
        if bodies.is_empty() {
            return Err(ContentError::EmptyBodies(category));
        }

        Ok(Self { titles, bodies })
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn bodies(&self) -> &[String] {
        &self.bodies
    }

    /// Draw a title and a body using the thread-local generator.
    pub fn select(&self) -> SelectedContent {
        self.select_with(&mut rand::rng())
    }

    /// Draw a title and a body, each uniformly and with replacement.
    pub fn select_with<R: Rng + ?Sized>(&self, rng: &mut R) -> SelectedContent {
        let title = &self.titles[rng.random_range(0..self.titles.len())];
        let body = &self.bodies[rng.random_range(0..self.bodies.len())];

        SelectedContent {
            title: title.clone(),
            body: body.clone(),
        }
    }
}

/// Read-only set of pools, one per category, built once at startup.
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    pools: HashMap<NotificationCategory, ContentPool>,
}

impl ContentLibrary {
    /// Build a library that must cover every category.
    pub fn new(
        pools: impl IntoIterator<Item = (NotificationCategory, ContentPool)>,
    ) -> Result<Self, ContentError> {
        let pools: HashMap<_, _> = pools.into_iter().collect();

        if let Some(missing) = NotificationCategory::ALL
            .into_iter()
            .find(|category| !pools.contains_key(category))
        {
            return Err(ContentError::MissingPool(missing));
        }

        Ok(Self { pools })
    }

    /// The texts the mobile apps ship with.
    pub fn builtin() -> Result<Self, ContentError> {
        use NotificationCategory::*;

        let pool = |category: NotificationCategory, titles: &[&str], bodies: &[&str]| {
            ContentPool::new(category, titles.iter().copied(), bodies.iter().copied())
                .map(|pool| (category, pool))
        };

        let library = Self::new([
            pool(MorningScripture, pools::HUKAMNAMA_TITLES, pools::HUKAMNAMA_BODIES)?,
            pool(EveningScripture, pools::PATH_TITLES, pools::PATH_BODIES)?,
            pool(NightScripture, pools::NIGHT_PATH_TITLES, pools::NIGHT_PATH_BODIES)?,
            pool(AdminPost, pools::ADMIN_POST_TITLES, pools::ADMIN_POST_BODIES)?,
            pool(
                AdminCopyright,
                pools::COPYRIGHT_REQUEST_TITLES,
                pools::COPYRIGHT_REQUEST_BODIES,
            )?,
        ])?;

        tracing::info!(categories = library.pools.len(), "Content library loaded");
        Ok(library)
    }

    pub fn pool(&self, category: NotificationCategory) -> Result<&ContentPool, ContentError> {
        self.pools
            .get(&category)
            .ok_or(ContentError::MissingPool(category))
    }

    pub fn select(&self, category: NotificationCategory) -> Result<SelectedContent, ContentError> {
        Ok(self.pool(category)?.select())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_pool_rejected_at_construction() {
        let err = ContentPool::new(
            NotificationCategory::NightScripture,
            Vec::<String>::new(),
            vec!["body"],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ContentError::EmptyTitles(NotificationCategory::NightScripture)
        ));

        let err = ContentPool::new(
            NotificationCategory::AdminPost,
            vec!["title"],
            Vec::<String>::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::EmptyBodies(_)));
    }

    #[test]
    fn test_single_element_pool_always_returns_it() {
        let pool = ContentPool::new(
            NotificationCategory::AdminPost,
            ["only title"],
            ["only body"],
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let selected = pool.select_with(&mut rng);
            assert_eq!(selected.title, "only title");
            assert_eq!(selected.body, "only body");
        }
    }

    #[test]
    fn test_selection_is_uniform() {
        let pool = ContentPool::new(
            NotificationCategory::MorningScripture,
            ["a", "b", "c", "d"],
            ["x"],
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 40_000;

        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..draws {
            *counts.entry(pool.select_with(&mut rng).title).or_default() += 1;
        }

        assert_eq!(counts.len(), 4);
        for (title, count) in counts {
            let freq = count as f64 / draws as f64;
            assert!(
                (0.23..0.27).contains(&freq),
                "title {title} drawn with frequency {freq}"
            );
        }
    }

    #[test]
    fn test_title_and_body_drawn_independently() {
        let pool = ContentPool::new(
            NotificationCategory::EveningScripture,
            ["t1", "t2"],
            ["b1", "b2"],
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let mut mixed = false;
        for _ in 0..200 {
            let selected = pool.select_with(&mut rng);
            if selected.title[1..] != selected.body[1..] {
                mixed = true;
                break;
            }
        }
        assert!(mixed, "title and body always came from the same index");
    }

    #[test]
    fn test_library_requires_every_category() {
        let pool = ContentPool::new(NotificationCategory::AdminPost, ["t"], ["b"]).unwrap();
        let err = ContentLibrary::new([(NotificationCategory::AdminPost, pool)]).unwrap_err();
        assert!(matches!(err, ContentError::MissingPool(_)));
    }

    #[test]
    fn test_builtin_library_covers_all_categories() {
        let library = ContentLibrary::builtin().unwrap();

        for category in NotificationCategory::ALL {
            let pool = library.pool(category).unwrap();
            let selected = library.select(category).unwrap();
            assert!(pool.titles().contains(&selected.title));
            assert!(pool.bodies().contains(&selected.body));
        }
    }
}
