mod pepper_search;
mod salt_distribution;
