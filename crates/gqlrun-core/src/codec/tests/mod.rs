mod scalar_codec_tests;
