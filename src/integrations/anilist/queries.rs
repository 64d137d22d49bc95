// src/integrations/anilist/queries.rs
//
// GraphQL documents sent to AniList. Both select the full field set that
// `domain::Anime` expects.

pub const GET_ANIMES_QUERY: &str = r#"
    query ($id: Int, $page: Int, $perPage: Int, $search: String) {
        Page(page: $page, perPage: $perPage) {
            pageInfo {
                total
                currentPage
                lastPage
                hasNextPage
                perPage
            }
            media(id: $id, search: $search, type: ANIME) {
                id
                title {
                    romaji
                    english
                    native
                }
                description
                coverImage {
                    color
                    medium
                    large
                    extraLarge
                }
                bannerImage
                meanScore
                seasonYear
                season
                episodes
                genres
                updatedAt
            }
        }
    }
"#;

pub const GET_ANIME_QUERY: &str = r#"
    query ($id: Int) {
        Media(id: $id, type: ANIME) {
            id
            title {
                romaji
                english
                native
            }
            description
            coverImage {
                color
                medium
                large
                extraLarge
            }
            bannerImage
            meanScore
            seasonYear
            season
            episodes
            genres
            updatedAt
        }
    }
"#;
