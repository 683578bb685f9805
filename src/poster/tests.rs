use {
  super::*,
  crate::{palette::Style, random::rng_from_seed},
  anyhow::Result
};

#[test] fn layer_count_and_order() -> Result<()> {
  let params = RenderParameters::default().with_layers(25).with_seed(Some(9));
  let poster = generate(&params)?;
  assert_eq!(poster.layers.len(), 25);
  assert_eq!(poster.titles, TitleText::default_titles());

  // the same stream consumed layer by layer reproduces every layer in order
  let mut rng = rng_from_seed(Some(9));
  for layer in &poster.layers {
    let single = compose(&params.clone().with_layers(1), &mut rng)?;
    assert_eq!(&single.layers[0], layer);
  }
  Ok(())
}

#[test] fn seeded_generation_is_deterministic() -> Result<()> {
  for style in Style::ALL {
    let params = RenderParameters::for_style(style).with_seed(Some(42));
    assert_eq!(generate(&params)?, generate(&params)?);
  }
  Ok(())
}

#[test] fn seed_zero_is_reproducible() -> Result<()> {
  let params = RenderParameters::default().with_layers(5).with_seed(Some(0));
  assert_eq!(generate(&params)?, generate(&params)?);
  Ok(())
}

#[test] fn unseeded_generation_varies() -> Result<()> {
  let params = RenderParameters::default().with_layers(3).with_seed(None);
  assert_ne!(generate(&params)?, generate(&params)?);
  Ok(())
}

#[test] fn draws_respect_ranges() -> Result<()> {
  let params = RenderParameters::for_style(Style::Vivid)
    .with_seed(Some(1))
    .with_layers(200);
  let poster = generate(&params)?;
  for layer in &poster.layers {
    assert!(params.palette.colors().contains(&layer.fill));
    assert_eq!(layer.stroke, params.stroke);
    assert_eq!(layer.blob.samples.len(), params.spikes);
    let c = layer.blob.center;
    assert!((-3.5..=3.5).contains(&c.x) && (-3.5..=3.5).contains(&c.y));
  }
  Ok(())
}

#[test] fn radius_is_drawn_from_range() -> Result<()> {
  let params = RenderParameters::default()
    .with_seed(Some(2))
    .with_layers(50)
    .with_radius(1.0, 1.5)
    .with_wobble(0.0, 0.0);
  for layer in generate(&params)?.layers {
    let r = layer.blob.samples[0].radius;
    assert!((1.0..=1.5).contains(&r));
    assert!(layer.blob.samples.iter().all(|s| s.radius == r));
  }
  Ok(())
}

#[test] fn gaussian_centers_cluster() -> Result<()> {
  let params = RenderParameters::default()
    .with_seed(Some(4))
    .with_layers(400)
    .with_spikes(3)
    .with_centers(CenterDistribution::Gaussian { mean: 1.0, std_dev: 0.5 });
  let poster = generate(&params)?;
  let mean_x = poster.layers.iter().map(|l| l.blob.center.x).sum::<f64>() / 400.0;
  assert!((mean_x - 1.0).abs() < 0.1, "mean x {}", mean_x);
  Ok(())
}

#[test] fn invalid_parameters_fail_before_generation() {
  let params = RenderParameters::default().with_radius(4.0, 3.0);
  assert!(matches!(generate(&params), Err(Error::InvalidParameter(_))));
  let mut rng = rng_from_seed(Some(0));
  assert!(compose(&params, &mut rng).is_err());
}

#[test] fn rejected_parameters_leave_rng_untouched() {
  use rand::Rng;

  let params = RenderParameters::default().with_spikes(usize::MAX);
  let mut rng = rng_from_seed(Some(6));
  let mut untouched = rng.clone();
  assert!(matches!(compose(&params, &mut rng), Err(Error::InvalidParameter(_))));
  assert_eq!(rng.gen::<u64>(), untouched.gen::<u64>());
}

#[test] fn no_layers_keeps_titles() -> Result<()> {
  let poster = generate(&RenderParameters::default().with_layers(0))?;
  assert!(poster.layers.is_empty());
  assert_eq!(poster.titles.len(), 2);
  Ok(())
}
