//! Web crawler connector

use crate::data_source::model;
use crate::error::TranslateError;
use crate::mapper::{self, list_to_model, list_to_remote, strings_to_model};
use kendra_cfn_api::types as wire;

pub fn to_remote(
    model: Option<&model::WebCrawlerConfiguration>,
) -> Result<Option<wire::WebCrawlerConfiguration>, TranslateError> {
    model.map(web_crawler_configuration_to_remote).transpose()
}

pub fn to_model(
    remote: Option<&wire::WebCrawlerConfiguration>,
) -> Option<model::WebCrawlerConfiguration> {
    remote.map(web_crawler_configuration_to_model)
}

fn web_crawler_configuration_to_remote(
    model: &model::WebCrawlerConfiguration,
) -> Result<wire::WebCrawlerConfiguration, TranslateError> {
    Ok(wire::WebCrawlerConfiguration {
        urls: model.urls.as_ref().map(urls_to_remote).transpose()?,
        crawl_depth: model.crawl_depth,
        max_links_per_page: model.max_links_per_page,
        max_content_size_per_page_in_mega_bytes: model.max_content_size_per_page_in_mega_bytes,
        max_urls_per_minute_crawl_rate: model.max_urls_per_minute_crawl_rate,
        url_inclusion_patterns: model.url_inclusion_patterns.clone(),
        url_exclusion_patterns: model.url_exclusion_patterns.clone(),
        proxy_configuration: model
            .proxy_configuration
            .as_ref()
            .map(mapper::proxy_configuration_to_remote)
            .transpose()?,
        authentication_configuration: model
            .authentication_configuration
            .as_ref()
            .map(authentication_configuration_to_remote)
            .transpose()?,
    })
}

fn web_crawler_configuration_to_model(
    remote: &wire::WebCrawlerConfiguration,
) -> model::WebCrawlerConfiguration {
    model::WebCrawlerConfiguration {
        urls: remote.urls.as_ref().map(urls_to_model),
        crawl_depth: remote.crawl_depth,
        max_links_per_page: remote.max_links_per_page,
        max_content_size_per_page_in_mega_bytes: remote.max_content_size_per_page_in_mega_bytes,
        max_urls_per_minute_crawl_rate: remote.max_urls_per_minute_crawl_rate,
        url_inclusion_patterns: strings_to_model(remote.url_inclusion_patterns.as_deref()),
        url_exclusion_patterns: strings_to_model(remote.url_exclusion_patterns.as_deref()),
        proxy_configuration: remote
            .proxy_configuration
            .as_ref()
            .map(mapper::proxy_configuration_to_model),
        authentication_configuration: remote
            .authentication_configuration
            .as_ref()
            .map(authentication_configuration_to_model),
    }
}

fn urls_to_remote(model: &model::WebCrawlerUrls) -> Result<wire::Urls, TranslateError> {
    Ok(wire::Urls {
        seed_url_configuration: model
            .seed_url_configuration
            .as_ref()
            .map(seed_url_configuration_to_remote)
            .transpose()?,
        site_maps_configuration: model
            .site_maps_configuration
            .as_ref()
            .map(site_maps_configuration_to_remote)
            .transpose()?,
    })
}

fn urls_to_model(remote: &wire::Urls) -> model::WebCrawlerUrls {
    model::WebCrawlerUrls {
        seed_url_configuration: remote
            .seed_url_configuration
            .as_ref()
            .map(seed_url_configuration_to_model),
        site_maps_configuration: remote
            .site_maps_configuration
            .as_ref()
            .map(site_maps_configuration_to_model),
    }
}

fn seed_url_configuration_to_remote(
    model: &model::WebCrawlerSeedUrlConfiguration,
) -> Result<wire::SeedUrlConfiguration, TranslateError> {
    Ok(wire::SeedUrlConfiguration {
        seed_urls: model.seed_urls.clone(),
        web_crawler_mode: model
            .web_crawler_mode
            .as_deref()
            .map(str::parse::<wire::WebCrawlerMode>)
            .transpose()?,
    })
}

fn seed_url_configuration_to_model(
    remote: &wire::SeedUrlConfiguration,
) -> model::WebCrawlerSeedUrlConfiguration {
    model::WebCrawlerSeedUrlConfiguration {
        seed_urls: strings_to_model(remote.seed_urls.as_deref()),
        web_crawler_mode: remote.web_crawler_mode.map(|value| value.as_str().to_string()),
    }
}

fn site_maps_configuration_to_remote(
    model: &model::WebCrawlerSiteMapsConfiguration,
) -> Result<wire::SiteMapsConfiguration, TranslateError> {
    Ok(wire::SiteMapsConfiguration {
        site_maps: model.site_maps.clone(),
    })
}

fn site_maps_configuration_to_model(
    remote: &wire::SiteMapsConfiguration,
) -> model::WebCrawlerSiteMapsConfiguration {
    model::WebCrawlerSiteMapsConfiguration {
        site_maps: strings_to_model(remote.site_maps.as_deref()),
    }
}

fn authentication_configuration_to_remote(
    model: &model::WebCrawlerAuthenticationConfiguration,
) -> Result<wire::AuthenticationConfiguration, TranslateError> {
    Ok(wire::AuthenticationConfiguration {
        basic_authentication: list_to_remote(
            model.basic_authentication.as_deref(),
            basic_authentication_configuration_to_remote,
        )?,
    })
}

fn authentication_configuration_to_model(
    remote: &wire::AuthenticationConfiguration,
) -> model::WebCrawlerAuthenticationConfiguration {
    model::WebCrawlerAuthenticationConfiguration {
        basic_authentication: list_to_model(
            remote.basic_authentication.as_deref(),
            basic_authentication_configuration_to_model,
        ),
    }
}

fn basic_authentication_configuration_to_remote(
    model: &model::WebCrawlerBasicAuthentication,
) -> Result<wire::BasicAuthenticationConfiguration, TranslateError> {
    Ok(wire::BasicAuthenticationConfiguration {
        host: model.host.clone(),
        port: model.port,
        credentials: model.credentials.clone(),
    })
}

fn basic_authentication_configuration_to_model(
    remote: &wire::BasicAuthenticationConfiguration,
) -> model::WebCrawlerBasicAuthentication {
    model::WebCrawlerBasicAuthentication {
        host: remote.host.clone(),
        port: remote.port,
        credentials: remote.credentials.clone(),
    }
}
